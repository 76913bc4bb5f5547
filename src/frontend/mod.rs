mod contact;
mod dom;
mod enhance;
mod hero;
mod nav;
mod preloader;
mod projects;
mod theme;
mod toast;
mod widgets;

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use crate::config::EffectsConfig;
use crate::log::{log_event, LogLevel};
use contact::ContactForm;
use hero::{FloatingShapes, Particles, SplitText, TypewriterLine, TypingText};
use nav::Navbar;
use preloader::PreloaderOverlay;
use projects::Projects;
use toast::ToastHost;
use widgets::{BackToTop, CurrentYear, ScrollProgress};

const STATS: &[(&str, &str)] = &[
    ("50", "Projects Completed"),
    ("30", "Happy Clients"),
    ("5", "Years Experience"),
    ("100", "Commitment"),
];

const SKILLS: &[(&str, &str, &str)] = &[
    ("HTML5", "fa-html5", "95"),
    ("CSS3", "fa-css3-alt", "90"),
    ("JavaScript", "fa-js", "88"),
    ("React", "fa-react", "85"),
    ("Node.js", "fa-node-js", "80"),
    ("Python", "fa-python", "75"),
];

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("https://github.com", "fa-github", "GitHub"),
    ("https://linkedin.com", "fa-linkedin-in", "LinkedIn"),
    ("https://twitter.com", "fa-twitter", "Twitter"),
];

#[hook]
pub(crate) fn use_config() -> Rc<EffectsConfig> {
    use_context::<Rc<EffectsConfig>>().unwrap_or_default()
}

fn hero_section() -> Html {
    html! {
        <section id="home" class="section hero">
            <div class="gradient-bg parallax" data-speed="0.3" aria-hidden="true"></div>
            <div class="pattern-bg" aria-hidden="true"></div>
            <Particles />
            <FloatingShapes />
            <div class="container hero-container">
                <div class="hero-content">
                    <p class="hero-greeting">{"Hello, I'm"}</p>
                    <h1 class="hero-title">
                        <SplitText text="Alex Morgan" />
                    </h1>
                    <h2 class="hero-subtitle">
                        {"I'm a "}<TypingText /><span class="cursor-blink" aria-hidden="true">{"|"}</span>
                    </h2>
                    <p class="hero-description">
                        <TypewriterLine text="I build fast, accessible and delightful web experiences." />
                    </p>
                    <div class="hero-buttons">
                        <a class="btn btn-primary" href="#projects">{"View My Work"}</a>
                        <a class="btn btn-secondary" href="#contact">{"Get In Touch"}</a>
                    </div>
                </div>
                <div class="hero-visual parallax" data-speed="0.15">
                    <div class="floating-element draggable" data-tooltip="Drag me around">
                        <i class="fas fa-code" aria-hidden="true"></i>
                    </div>
                    <div class="tech-icons" aria-hidden="true">
                        <span class="tech-icon"><i class="fab fa-rust"></i></span>
                        <span class="tech-icon"><i class="fab fa-react"></i></span>
                        <span class="tech-icon"><i class="fab fa-node-js"></i></span>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn about_section() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="container">
                <h2 class="section-title animate-on-scroll" data-animation="fadeInUp">{"About Me"}</h2>
                <div class="about-content">
                    <div class="about-image scroll-reveal">
                        <img class="lazy" data-src="/images/profile.jpg" alt="Portrait" width="320" height="320" />
                        <div class="skeleton" data-width="320px" data-height="320px" aria-hidden="true"></div>
                    </div>
                    <div class="about-text animate-on-scroll" data-animation="fadeInRight" data-delay="200">
                        <p>
                            {"Developer and designer who cares about the details: performance budgets, \
                              keyboard paths and the small motions that make an interface feel alive."}
                        </p>
                        <ul class="about-facts">
                            <li data-tooltip="Based in Lisbon">
                                <i class="fas fa-map-marker-alt" aria-hidden="true"></i>{" Remote friendly"}
                            </li>
                            <li data-tooltip="Usually replies within a day">
                                <i class="fas fa-envelope" aria-hidden="true"></i>{" Open to work"}
                            </li>
                        </ul>
                        <div class="stats">
                            { for STATS.iter().map(|(count, label)| html! {
                                <div class="stat glow-on-hover">
                                    <span class="stat-number" data-count={*count}>{"0"}</span>
                                    <span class="stat-label">{*label}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn skills_section() -> Html {
    html! {
        <section id="skills" class="section skills">
            <div class="container">
                <h2 class="section-title animate-on-scroll" data-animation="fadeInUp">{"Skills"}</h2>
                <div class="skills-grid">
                    { for SKILLS.iter().enumerate().map(|(index, (name, icon, width))| html! {
                        <div
                            class="skill-item glow-on-hover animate-on-scroll"
                            data-animation="fadeInUp"
                            data-delay={(index * 100).to_string()}
                        >
                            <div class="skill-header">
                                <i class={classes!("fab", *icon)} aria-hidden="true"></i>
                                <span class="skill-name">{*name}</span>
                                <span class="skill-percent">{format!("{width}%")}</span>
                            </div>
                            <div class="skill-bar">
                                <div class="skill-progress" data-width={*width}></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn contact_section() -> Html {
    html! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title animate-on-scroll" data-animation="fadeInUp">{"Get In Touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info scroll-reveal">
                        <p>{"Have a project in mind or just want to say hello? My inbox is open."}</p>
                        <a class="btn btn-secondary" href="mailto:hello@example.com">{"hello@example.com"}</a>
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-content">
                <p>{"© "}<CurrentYear />{" Alex Morgan. All rights reserved."}</p>
                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|(href, icon, label)| html! {
                        <a
                            class="social-link"
                            href={*href}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={*label}
                            data-tooltip={*label}
                        >
                            <i class={classes!("fab", *icon)} aria-hidden="true"></i>
                        </a>
                    }) }
                </div>
            </div>
        </footer>
    }
}

#[function_component(Page)]
fn page() -> Html {
    let config = use_config();

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let subscriptions = enhance::install_all(&config);
            log_event(&config, LogLevel::Debug, "effects_installed", serde_json::json!({}));
            move || drop(subscriptions)
        });
    }

    html! {
        <>
            <PreloaderOverlay />
            <div class="custom-cursor" aria-hidden="true"></div>
            <div class="cursor-dot" aria-hidden="true"></div>
            <ScrollProgress />
            <Navbar />
            <main>
                {hero_section()}
                {about_section()}
                {skills_section()}
                <Projects />
                {contact_section()}
            </main>
            {footer()}
            <BackToTop />
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| Rc::new(EffectsConfig::from_env()));

    html! {
        <ContextProvider<Rc<EffectsConfig>> context={(*config).clone()}>
            <ToastHost>
                <Page />
            </ToastHost>
        </ContextProvider<Rc<EffectsConfig>>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

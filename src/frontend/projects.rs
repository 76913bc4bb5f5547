use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::dom::{millis, set_style};
use super::use_config;
use crate::filter::{plan_transitions, CardTransition, ProjectFilter, HIDE_DURATION, SHOW_SETTLE};
use crate::log::{log_event, LogLevel};

struct Project {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    icon: &'static str,
    tags: &'static [&'static str],
    live: &'static str,
    source: &'static str,
}

const FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("fullstack", "Full Stack"),
];

const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Storefront",
        description: "Responsive storefront with cart, checkout flow and product search.",
        category: "frontend",
        icon: "fa-shopping-cart",
        tags: &["HTML", "CSS", "JavaScript"],
        live: "#",
        source: "https://github.com",
    },
    Project {
        title: "Task Management API",
        description: "REST API with authentication, role-based access and audit trails.",
        category: "backend",
        icon: "fa-server",
        tags: &["Node.js", "Express", "PostgreSQL"],
        live: "#",
        source: "https://github.com",
    },
    Project {
        title: "Team Chat",
        description: "Real-time messaging with presence, channels and file sharing.",
        category: "fullstack",
        icon: "fa-comments",
        tags: &["React", "WebSocket", "MongoDB"],
        live: "#",
        source: "https://github.com",
    },
    Project {
        title: "Weather Dashboard",
        description: "Forecast dashboard with charts, geolocation and saved cities.",
        category: "frontend",
        icon: "fa-cloud-sun",
        tags: &["Vue", "Chart.js", "REST"],
        live: "#",
        source: "https://github.com",
    },
    Project {
        title: "Blog Platform",
        description: "Markdown publishing with comments, tags and an admin panel.",
        category: "fullstack",
        icon: "fa-blog",
        tags: &["Next.js", "Prisma", "SQLite"],
        live: "#",
        source: "https://github.com",
    },
    Project {
        title: "Analytics Pipeline",
        description: "Event ingestion and aggregation service with scheduled reports.",
        category: "backend",
        icon: "fa-chart-line",
        tags: &["Python", "Redis", "Docker"],
        live: "#",
        source: "https://github.com",
    },
];

fn apply_filter(grid: &HtmlElement, filter: &ProjectFilter) -> Vec<Timeout> {
    let Ok(list) = grid.query_selector_all(".project-card") else {
        return Vec::new();
    };
    let cards: Vec<HtmlElement> = (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    let categories: Vec<Option<String>> = cards
        .iter()
        .map(|card| card.get_attribute("data-category"))
        .collect();
    let plan = plan_transitions(filter, categories.iter().map(Option::as_deref));

    let mut timers = Vec::new();
    for (card, transition) in cards.into_iter().zip(plan) {
        match transition {
            CardTransition::Show { delay } => {
                let display = card.clone();
                timers.push(Timeout::new(millis(delay), move || {
                    set_style(&display, "display", "block");
                }));
                timers.push(Timeout::new(millis(delay + SHOW_SETTLE), move || {
                    set_style(&card, "opacity", "1");
                    set_style(&card, "transform", "translateY(0)");
                }));
            }
            CardTransition::Hide => {
                set_style(&card, "opacity", "0");
                set_style(&card, "transform", "translateY(20px)");
                timers.push(Timeout::new(millis(HIDE_DURATION), move || {
                    set_style(&card, "display", "none");
                }));
            }
        }
    }
    timers
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let config = use_config();
    let active = use_state(|| ProjectFilter::All);
    let grid_ref = use_node_ref();
    // A new selection cancels whatever the previous one still had pending.
    let pending = use_mut_ref(Vec::<Timeout>::new);

    let buttons = FILTERS.iter().map(|(value, label)| {
        let filter = ProjectFilter::from_attribute(value);
        let is_active = *active == filter;
        let onclick = {
            let active = active.clone();
            let grid_ref = grid_ref.clone();
            let pending = pending.clone();
            let config = config.clone();
            Callback::from(move |_: MouseEvent| {
                let filter = ProjectFilter::from_attribute(value);
                if let Some(grid) = grid_ref.cast::<HtmlElement>() {
                    *pending.borrow_mut() = apply_filter(&grid, &filter);
                }
                log_event(
                    &config,
                    LogLevel::Debug,
                    "filter_applied",
                    serde_json::json!({ "filter": filter.as_str() }),
                );
                active.set(filter);
            })
        };

        html! {
            <button
                class={classes!("filter-btn", is_active.then_some("active"))}
                type="button"
                data-filter={*value}
                onclick={onclick}
            >
                {*label}
            </button>
        }
    });

    let cards = PROJECTS.iter().map(|project| {
        html! {
            <article class="project-card tilt-effect" data-category={project.category}>
                <div class="project-image">
                    <i class={classes!("fas", project.icon)} aria-hidden="true"></i>
                    <div class="project-overlay">
                        <a class="project-link" href={project.live} aria-label="Live demo">
                            <i class="fas fa-external-link-alt" aria-hidden="true"></i>
                        </a>
                        <a
                            class="project-link"
                            href={project.source}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Source code"
                        >
                            <i class="fab fa-github" aria-hidden="true"></i>
                        </a>
                    </div>
                </div>
                <div class="project-content">
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-description">{project.description}</p>
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                    </div>
                </div>
            </article>
        }
    });

    html! {
        <section id="projects" class="section projects">
            <div class="container">
                <h2 class="section-title animate-on-scroll" data-animation="fadeInUp">{"Featured Projects"}</h2>
                <div class="filter-buttons">
                    { for buttons }
                </div>
                <div class="projects-grid" ref={grid_ref}>
                    { for cards }
                </div>
            </div>
        </section>
    }
}

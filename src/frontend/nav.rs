use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use super::dom::{document, event_target_node, query_all, set_body_overflow, use_scroll_y, viewport_size};
use super::theme::ThemeToggle;
use super::use_config;
use crate::menu::{MenuEvent, MobileMenu};
use crate::scroll::{active_section, nav_link_is_active, navbar_scrolled, SectionBounds};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

impl Reducible for MobileMenu {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn section_bounds() -> Vec<SectionBounds> {
    query_all::<HtmlElement>("section[id]")
        .into_iter()
        .map(|section| SectionBounds {
            id: section.id(),
            offset_top: f64::from(section.offset_top()),
            height: f64::from(section.client_height()),
        })
        .collect()
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = use_config();
    let scroll = use_scroll_y();
    let menu = use_reducer(MobileMenu::default);
    let clicked = use_state(|| None::<&'static str>);
    let hamburger_ref = use_node_ref();
    let menu_ref = use_node_ref();
    let overflow_open = use_mut_ref(|| false);

    {
        let overflow = menu.body_overflow();
        use_effect_with(menu.is_open(), move |open| {
            let was_open = overflow_open.replace(*open);
            if was_open != *open {
                set_body_overflow(overflow);
            }
            || ()
        });
    }

    {
        let dispatcher = menu.dispatcher();
        let hamburger_ref = hamburger_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with((), move |_| {
            let listeners = document().map(|document| {
                let click_dispatcher = dispatcher.clone();
                let click = EventListener::new(&document, "click", move |event| {
                    let target = event_target_node(event);
                    let inside = |node_ref: &NodeRef| {
                        node_ref
                            .get()
                            .map(|node| node.contains(target.as_ref()))
                            .unwrap_or(false)
                    };
                    let inside_menu = inside(&hamburger_ref) || inside(&menu_ref);
                    click_dispatcher.dispatch(MenuEvent::DocumentClicked { inside_menu });
                });
                let keydown = EventListener::new(&document, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|key| key.key() == "Escape")
                        .unwrap_or(false);
                    if is_escape {
                        dispatcher.dispatch(MenuEvent::EscapePressed);
                    }
                });
                (click, keydown)
            });
            move || drop(listeners)
        });
    }

    // A clicked link stays highlighted until the next scroll event moves on.
    {
        let clicked = clicked.clone();
        use_effect_with(scroll.to_bits(), move |_| {
            clicked.set(None);
            || ()
        });
    }

    let sections = section_bounds();
    let active_id = active_section(&sections, scroll);
    let active_href = (*clicked).or_else(|| {
        NAV_LINKS
            .iter()
            .map(|(href, _)| *href)
            .find(|href| nav_link_is_active(href, active_id))
    });

    let on_hamburger = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuEvent::HamburgerClicked))
    };

    let links = NAV_LINKS.iter().map(|(href, label)| {
        let onclick = {
            let dispatcher = menu.dispatcher();
            let clicked = clicked.clone();
            let config = config.clone();
            let href: &'static str = *href;
            Callback::from(move |_: MouseEvent| {
                let narrow_viewport = config.is_mobile_width(viewport_size().0);
                dispatcher.dispatch(MenuEvent::NavLinkClicked { narrow_viewport });
                clicked.set(Some(href));
            })
        };

        html! {
            <li class="nav-item">
                <a
                    class={classes!("nav-link", (active_href == Some(*href)).then_some("active"))}
                    href={*href}
                    onclick={onclick}
                >
                    {*label}
                </a>
            </li>
        }
    });

    html! {
        <nav class={classes!("navbar", navbar_scrolled(scroll).then_some("scrolled"))}>
            <div class="nav-container">
                <a class="nav-logo" href="#home">{"<Portfolio />"}</a>
                <ul ref={menu_ref} class={classes!("nav-menu", menu.is_open().then_some("active"))}>
                    { for links }
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        id="hamburger"
                        ref={hamburger_ref}
                        class={classes!("hamburger", menu.is_open().then_some("active"))}
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded={menu.is_open().to_string()}
                        onclick={on_hamburger}
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}

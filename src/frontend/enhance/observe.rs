use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{HtmlElement, HtmlImageElement};

use crate::backdrop::{ScrollAnimation, SCROLL_ANIMATION_ROOT_MARGIN, SCROLL_ANIMATION_THRESHOLD};
use crate::counters::{
    parse_skill_width, skill_width_style, Counter, COUNTER_TICK, SKILL_BAR_DELAY,
    SKILL_BAR_ROOT_MARGIN, VISIBILITY_THRESHOLD,
};
use crate::frontend::dom::{append_css, millis, query_all, set_style, Subscriptions, VisibilityWatch};

fn watch_skill_bars(subscriptions: &mut Subscriptions) {
    for bar in query_all::<HtmlElement>(".skill-progress[data-width]") {
        let Some(width) = parse_skill_width(bar.get_attribute("data-width").as_deref()) else {
            continue;
        };

        let target = bar.clone();
        let watch = VisibilityWatch::once(&bar, VISIBILITY_THRESHOLD, SKILL_BAR_ROOT_MARGIN, move || {
            set_style(&target, "width", "0%");
            Timeout::new(millis(SKILL_BAR_DELAY), move || {
                append_css(&target, &skill_width_style(width));
            })
            .forget();
        });
        if let Some(watch) = watch {
            subscriptions.hold(watch);
        }
    }
}

fn run_counter(element: HtmlElement, mut counter: Counter) {
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let ticking = slot.clone();
    *slot.borrow_mut() = Some(Interval::new(millis(COUNTER_TICK), move || {
        element.set_text_content(Some(&counter.tick()));
        if counter.is_finished() {
            // Breaks the slot <-> closure cycle and stops the interval.
            ticking.borrow_mut().take();
        }
    }));
}

fn watch_counters(subscriptions: &mut Subscriptions) {
    for element in query_all::<HtmlElement>(".stat-number[data-count]") {
        let Some(counter) = element
            .get_attribute("data-count")
            .and_then(|raw| Counter::from_attribute(&raw))
        else {
            continue;
        };

        let target = element.clone();
        let watch = VisibilityWatch::once(&element, VISIBILITY_THRESHOLD, "0px", move || {
            run_counter(target, counter);
        });
        if let Some(watch) = watch {
            subscriptions.hold(watch);
        }
    }
}

fn watch_scroll_animations(subscriptions: &mut Subscriptions) {
    for element in query_all::<HtmlElement>(".animate-on-scroll") {
        set_style(&element, "opacity", "0");
        let animation = ScrollAnimation::from_attributes(
            element.get_attribute("data-animation").as_deref(),
            element.get_attribute("data-delay").as_deref(),
        );

        let target = element.clone();
        let watch = VisibilityWatch::once(
            &element,
            SCROLL_ANIMATION_THRESHOLD,
            SCROLL_ANIMATION_ROOT_MARGIN,
            move || {
                Timeout::new(millis(animation.delay), move || {
                    append_css(&target, &animation.style());
                })
                .forget();
            },
        );
        if let Some(watch) = watch {
            subscriptions.hold(watch);
        }
    }
}

fn watch_lazy_images(subscriptions: &mut Subscriptions) {
    for image in query_all::<HtmlImageElement>("img[data-src]") {
        let target = image.clone();
        let watch = VisibilityWatch::once(&image, 0.0, "0px", move || {
            if let Some(src) = target.get_attribute("data-src") {
                target.set_src(&src);
                let _ = target.remove_attribute("data-src");
            }
            let _ = target.class_list().add_1("loaded");
        });
        if let Some(watch) = watch {
            subscriptions.hold(watch);
        }
    }
}

pub fn install() -> Subscriptions {
    let mut subscriptions = Subscriptions::default();
    watch_skill_bars(&mut subscriptions);
    watch_counters(&mut subscriptions);
    watch_scroll_animations(&mut subscriptions);
    watch_lazy_images(&mut subscriptions);
    subscriptions
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use super::dom::{millis, random, use_scroll_y};
use crate::backdrop::{
    generate_particles, generate_shapes, split_text, typewriter_frame, TypewriterReveal,
    FLOATING_SHAPE_COUNT, PARTICLE_COUNT, TYPEWRITER_START, TYPEWRITER_STEP,
};
use crate::typing::{Typewriter, START_DELAY};

type TimerSlot = Rc<RefCell<Option<Timeout>>>;

fn schedule_typing(slot: TimerSlot, delay: std::time::Duration, mut typewriter: Typewriter, text: UseStateHandle<String>) {
    let next_slot = slot.clone();
    let timeout = Timeout::new(millis(delay), move || {
        let Some(frame) = typewriter.tick() else {
            return;
        };
        text.set(frame.text);
        schedule_typing(next_slot, frame.next_delay, typewriter, text);
    });
    // Drops the timeout that is running; wasm-bindgen frees it once the call returns.
    *slot.borrow_mut() = Some(timeout);
}

#[function_component(TypingText)]
pub fn typing_text() -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with((), move |_| {
            let slot: TimerSlot = Rc::new(RefCell::new(None));
            schedule_typing(slot.clone(), START_DELAY, Typewriter::hero(), text);
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    html! {
        <span class="typing-text" aria-live="polite">{(*text).clone()}</span>
    }
}

#[function_component(Particles)]
pub fn particles() -> Html {
    let particles = use_memo((), |_| generate_particles(PARTICLE_COUNT, &mut random));
    let scroll = use_scroll_y();

    html! {
        <div class="particles-container" aria-hidden="true">
            { for particles.iter().enumerate().map(|(index, particle)| html! {
                <div class="particle" style={particle.style(scroll, index)}></div>
            }) }
        </div>
    }
}

#[function_component(FloatingShapes)]
pub fn floating_shapes() -> Html {
    let shapes = use_memo((), |_| generate_shapes(FLOATING_SHAPE_COUNT, &mut random));

    html! {
        <div class="floating-shapes" aria-hidden="true">
            { for shapes.iter().enumerate().map(|(index, shape)| html! {
                <div class={format!("shape shape-{}", index + 1)} style={shape.style()}></div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SplitText)]
pub fn split_text_heading(props: &TextProps) -> Html {
    let glyphs = use_memo(props.text.clone(), |text| split_text(text));

    html! {
        <span class={classes!("split-text", props.class.clone())} aria-label={props.text.clone()}>
            { for glyphs.iter().map(|glyph| html! {
                <span aria-hidden="true" style={glyph.style.clone()}>{glyph.text.clone()}</span>
            }) }
        </span>
    }
}

#[function_component(TypewriterLine)]
pub fn typewriter_line(props: &TextProps) -> Html {
    let revealed = use_state(|| 0_usize);

    {
        let revealed = revealed.clone();
        use_effect_with(props.text.clone(), move |text| {
            revealed.set(0);
            let mut reveal = TypewriterReveal::new(text);
            let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

            let slot = interval.clone();
            let start = Timeout::new(millis(TYPEWRITER_START), move || {
                let ticking = slot.clone();
                *slot.borrow_mut() = Some(Interval::new(millis(TYPEWRITER_STEP), move || {
                    revealed.set(reveal.step());
                    if reveal.is_finished() {
                        ticking.borrow_mut().take();
                    }
                }));
            });

            move || {
                drop(start);
                interval.borrow_mut().take();
            }
        });
    }

    let (visible, width) = typewriter_frame(&props.text, *revealed);
    let finished = *revealed >= props.text.chars().count();
    let style = format!(
        "width: {width}%;{}",
        if finished { " border-right: none;" } else { "" }
    );

    html! {
        <span class={classes!("typewriter", props.class.clone())} style={style}>{visible}</span>
    }
}

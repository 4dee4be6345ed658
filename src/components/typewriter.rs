//! Timed character reveal for the quotes section.
//!
//! Once `visible` turns true the component waits `start_delay_ms`, then
//! reveals one character per tick until the whole string is shown. The guard
//! state makes it run once per mount even if the parent re-fires the
//! visibility flag. Both timers are held in the effect and dropped in its
//! cleanup so nothing fires against unmounted state; the interval also drops
//! itself as soon as the last character is revealed.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

const TICK_MS: u32 = 35;

/// One reveal step: the next character count, clamped to the text length,
/// and whether the reveal is finished (so the caller can stop its timer).
fn advance(revealed: usize, text_len: usize) -> (usize, bool) {
    let next = (revealed + 1).min(text_len);
    (next, next >= text_len)
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: String,
    #[prop_or(0)]
    pub start_delay_ms: u32,
    /// Trigger from the parent, expected to be sticky.
    pub visible: bool,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let shown = use_state_eq(|| 0usize);
    let started = use_state_eq(|| false);

    {
        let shown = shown.clone();
        let started = started.clone();
        let text_len = props.text.chars().count();
        let start_delay = props.start_delay_ms;
        use_effect_with_deps(
            move |visible| {
                let timers: Rc<RefCell<(Option<Timeout>, Option<Interval>)>> =
                    Rc::new(RefCell::new((None, None)));

                if *visible && !*started {
                    started.set(true);
                    let timers_inner = timers.clone();
                    let timeout = Timeout::new(start_delay, move || {
                        let timers_done = timers_inner.clone();
                        let mut revealed = 0usize;
                        let interval = Interval::new(TICK_MS, move || {
                            let (next, done) = advance(revealed, text_len);
                            revealed = next;
                            shown.set(next);
                            if done {
                                timers_done.borrow_mut().1.take();
                            }
                        });
                        timers_inner.borrow_mut().1 = Some(interval);
                    });
                    timers.borrow_mut().0 = Some(timeout);
                }

                move || {
                    let mut held = timers.borrow_mut();
                    held.0.take();
                    held.1.take();
                }
            },
            props.visible,
        );
    }

    let revealed_text: String = props.text.chars().take(*shown).collect();
    let done = *shown >= props.text.chars().count();

    html! {
        <span class="typewriter" aria-label={props.text.clone()}>
            { revealed_text }
            if !done && *started {
                <span class="typewriter-caret" aria-hidden="true"></span>
            }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_reveals_one_character_per_tick() {
        assert_eq!(advance(0, 5), (1, false));
        assert_eq!(advance(3, 5), (4, false));
    }

    #[test]
    fn advance_reports_done_at_the_last_character() {
        // The tick that shows the final character must tell the caller to
        // stop the timer rather than keep firing forever.
        assert_eq!(advance(4, 5), (5, true));
    }

    #[test]
    fn advance_stays_clamped_after_completion() {
        assert_eq!(advance(5, 5), (5, true));
        assert_eq!(advance(7, 5), (5, true));
    }

    #[test]
    fn advance_finishes_immediately_for_empty_text() {
        assert_eq!(advance(0, 0), (0, true));
    }
}

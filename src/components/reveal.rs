//! Viewport-triggered entrance animation wrapper.
//!
//! Sections wrap their content in `Reveal` instead of talking to an
//! animation engine. The wrapper starts hidden and gains the `visible` class
//! the first time it scrolls into view; the actual fade/slide is a CSS
//! transition defined globally, delayed per instance via `delay_ms`. The
//! flag is sticky, so the entrance runs once per mount.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

// How far (px) the element must clear the bottom edge before it counts as
// on screen.
const REVEAL_MARGIN: f64 = 50.0;

/// True once the referenced element has been scrolled into view. Checks on
/// mount and on every window scroll; never reverts to false. The listener is
/// removed when the calling component unmounts.
#[hook]
pub fn use_on_screen(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let check = {
                    let window = window.clone();
                    move || {
                        if let Some(element) = node.cast::<web_sys::Element>() {
                            let rect = element.get_bounding_client_rect();
                            let viewport = window
                                .inner_height()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(0.0);
                            if rect.top() < viewport - REVEAL_MARGIN && rect.bottom() > 0.0 {
                                visible.set(true);
                            }
                        }
                    }
                };

                // The element may already be on screen on mount
                check();

                let scroll_callback =
                    Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_on_screen(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

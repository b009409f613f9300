use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const VISIBLE_MS: u32 = 3_000;
const SLIDE_OUT_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Toast shown in the upper-right corner. Slides in on mount, holds for
/// three seconds, slides back out and then asks the parent to drop it.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                // A message swap mid-slide-out must restart from the
                // visible state.
                leaving.set(false);
                let cancelled = Rc::new(Cell::new(false));
                {
                    let cancelled = cancelled.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(VISIBLE_MS).await;
                        if cancelled.get() {
                            return;
                        }
                        leaving.set(true);
                        TimeoutFuture::new(SLIDE_OUT_MS).await;
                        if cancelled.get() {
                            return;
                        }
                        on_dismiss.emit(());
                    });
                }
                move || cancelled.set(true)
            },
            props.message.clone(),
        );
    }

    html! {
        <div class={classes!("notification", (*leaving).then(|| "leaving"))}>
            <span class="notification-message">{ &props.message }</span>
            <style>
                {r#"
                .notification {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 1200;
                    padding: 0.9rem 1.4rem;
                    background: var(--bg-elevated);
                    border: 1px solid var(--border-subtle);
                    border-radius: 10px;
                    box-shadow: var(--shadow-medium);
                    animation: slideInRight 0.5s ease-out forwards;
                }
                .notification.leaving {
                    animation: slideOutRight 0.5s ease-in forwards;
                }
                .notification-message {
                    color: var(--text-primary);
                    font-size: 0.95rem;
                }
                @keyframes slideInRight {
                    from { transform: translateX(120%); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                @keyframes slideOutRight {
                    from { transform: translateX(0); opacity: 1; }
                    to { transform: translateX(120%); opacity: 0; }
                }
                "#}
            </style>
        </div>
    }
}

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::flow::{AccessFlow, PopupPhase, Tick};

/// Duration of the popup's zoom-out before the gallery takes over.
const EXIT_ZOOM_MS: u32 = 300;

/// How long the finished countdown keeps its zero on screen before the
/// enter view replaces it.
const ZERO_HOLD_MS: u32 = 300;

fn open_invite() {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(config::INVITE_URL, "_blank");
    }
}

fn countdown_view(seconds: u32) -> Html {
    html! {
        <div class="popup-view" key="counting">
            <h2>{ "Verifying" }</h2>
            <div class="countdown-timer">
                <span class="countdown-number" key={seconds.to_string()}>
                    { seconds.to_string() }
                </span>
            </div>
            <p class="popup-copy">{ "Hang tight, unlocking your access..." }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryPopupProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_granted: Callback<()>,
}

/// Modal gating gallery access. The phase machine lives in a mut ref so the
/// countdown interval always sees current state; a plain state copy mirrors
/// it for rendering. Opening always resets the machine and cancels any timer
/// left over from a previous visit.
#[function_component(GalleryPopup)]
pub fn gallery_popup(props: &GalleryPopupProps) -> Html {
    let machine = use_mut_ref(AccessFlow::new);
    let view = use_state(AccessFlow::new);
    let countdown = use_mut_ref(|| None::<Interval>);
    let zero_hold = use_state(|| false);
    let zero_hold_timer = use_mut_ref(|| None::<Timeout>);
    let exit_zoom = use_state(|| false);
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let machine = machine.clone();
        let view = view.clone();
        let countdown = countdown.clone();
        let zero_hold = zero_hold.clone();
        let zero_hold_timer = zero_hold_timer.clone();
        let exit_zoom = exit_zoom.clone();
        let exit_timer = exit_timer.clone();
        use_effect_with_deps(
            move |&open| {
                countdown.borrow_mut().take();
                zero_hold_timer.borrow_mut().take();
                exit_timer.borrow_mut().take();
                if open {
                    machine.borrow_mut().reset();
                    view.set(*machine.borrow());
                    zero_hold.set(false);
                    exit_zoom.set(false);
                }
                move || {
                    countdown.borrow_mut().take();
                    zero_hold_timer.borrow_mut().take();
                    exit_timer.borrow_mut().take();
                }
            },
            props.open,
        );
    }

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |&open| {
                let mut listener = None;
                if open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let closure =
                            Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                                if event.key() == "Escape" {
                                    on_close.emit(());
                                }
                            })
                                as Box<dyn FnMut(_)>);
                        if document
                            .add_event_listener_with_callback(
                                "keydown",
                                closure.as_ref().unchecked_ref(),
                            )
                            .is_ok()
                        {
                            listener = Some((document, closure));
                        }
                    }
                }
                move || {
                    if let Some((document, closure)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.open,
        );
    }

    let on_join = {
        let machine = machine.clone();
        let view = view.clone();
        let countdown = countdown.clone();
        let zero_hold = zero_hold.clone();
        let zero_hold_timer = zero_hold_timer.clone();
        Callback::from(move |_: MouseEvent| {
            if !machine.borrow_mut().join() {
                return;
            }
            view.set(*machine.borrow());
            open_invite();
            let interval = {
                let machine = machine.clone();
                let view = view.clone();
                let countdown = countdown.clone();
                let zero_hold = zero_hold.clone();
                let zero_hold_timer = zero_hold_timer.clone();
                Interval::new(1_000, move || {
                    let outcome = machine.borrow_mut().tick();
                    view.set(*machine.borrow());
                    if matches!(outcome, Tick::Finished | Tick::Ignored) {
                        countdown.borrow_mut().take();
                    }
                    if matches!(outcome, Tick::Finished) {
                        // Keep the zero painted for a beat before the
                        // enter view appears.
                        zero_hold.set(true);
                        let zero_hold = zero_hold.clone();
                        let timeout =
                            Timeout::new(ZERO_HOLD_MS, move || zero_hold.set(false));
                        zero_hold_timer.borrow_mut().replace(timeout);
                    }
                })
            };
            countdown.borrow_mut().replace(interval);
        })
    };

    let on_enter = {
        let machine = machine.clone();
        let exit_zoom = exit_zoom.clone();
        let exit_timer = exit_timer.clone();
        let on_granted = props.on_granted.clone();
        Callback::from(move |_: MouseEvent| {
            if !machine.borrow().may_enter() {
                return;
            }
            exit_zoom.set(true);
            let on_granted = on_granted.clone();
            let timeout = Timeout::new(EXIT_ZOOM_MS, move || on_granted.emit(()));
            exit_timer.borrow_mut().replace(timeout);
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    if !props.open {
        return html! {};
    }

    // Distinct keys force a remount per phase, replaying the entry
    // animation on each view swap. The countdown panel outlives its phase by
    // one beat so the zero actually lands on screen.
    let body = match view.phase() {
        PopupPhase::Initial => html! {
            <div class="popup-view" key="initial">
                <h2>{ "Unlock the Gallery" }</h2>
                <p class="popup-copy">
                    { "Join our community server to get access to the full collection." }
                </p>
                <button class="primary-btn" onclick={on_join}>{ "Join Server" }</button>
                <p class="popup-hint">{ "Opens in a new tab" }</p>
            </div>
        },
        PopupPhase::Counting => countdown_view(view.seconds_remaining()),
        PopupPhase::ReadyToEnter if *zero_hold => countdown_view(view.seconds_remaining()),
        PopupPhase::ReadyToEnter => html! {
            <div class="popup-view" key="ready">
                <h2>{ "You're In" }</h2>
                <p class="popup-copy">{ "Access confirmed. Enjoy the collection." }</p>
                <button class="primary-btn" onclick={on_enter}>{ "Enter Gallery" }</button>
            </div>
        },
    };

    html! {
        <div class="popup-overlay" onclick={close.clone()}>
            <div
                class={classes!("popup-content", (*exit_zoom).then(|| "zoom-out"))}
                onclick={keep_open}
            >
                <button class="popup-close" onclick={close}>{ "×" }</button>
                { body }
            </div>
            <style>
                {r#"
                .popup-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(4, 4, 10, 0.8);
                    backdrop-filter: blur(6px);
                    animation: popupFadeIn 0.3s ease-out;
                }
                .popup-content {
                    position: relative;
                    width: min(420px, calc(100vw - 2rem));
                    padding: 2.5rem 2rem 2rem;
                    background: var(--bg-elevated);
                    border: 1px solid var(--border-subtle);
                    border-radius: 16px;
                    box-shadow: var(--shadow-medium);
                    text-align: center;
                    animation: popupRise 0.3s ease-out;
                }
                .popup-content.zoom-out {
                    animation: popupZoomOut 0.3s ease-in forwards;
                }
                .popup-close {
                    position: absolute;
                    top: 0.6rem;
                    right: 0.9rem;
                    padding: 0.2rem 0.4rem;
                    background: none;
                    border: none;
                    color: var(--text-secondary);
                    font-size: 1.6rem;
                    line-height: 1;
                }
                .popup-close:hover {
                    color: var(--text-primary);
                }
                .popup-view {
                    animation: viewFade 0.3s ease-out;
                }
                .popup-view h2 {
                    margin-bottom: 0.8rem;
                    font-size: 1.5rem;
                }
                .popup-copy {
                    margin-bottom: 1.4rem;
                    color: var(--text-secondary);
                }
                .popup-hint {
                    margin-top: 0.8rem;
                    font-size: 0.8rem;
                    color: var(--text-secondary);
                }
                .countdown-timer {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 92px;
                    height: 92px;
                    margin: 0 auto 1.2rem;
                    border: 3px solid var(--accent);
                    border-radius: 50%;
                }
                .countdown-number {
                    font-size: 2.2rem;
                    font-weight: 700;
                    color: var(--accent);
                    animation: countdownPulse 1s ease-out;
                }
                @keyframes countdownPulse {
                    0% { transform: scale(1.35); opacity: 0.4; }
                    100% { transform: scale(1); opacity: 1; }
                }
                @keyframes viewFade {
                    from { transform: translateY(12px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @keyframes popupFadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes popupRise {
                    from { transform: translateY(18px) scale(0.96); opacity: 0; }
                    to { transform: translateY(0) scale(1); opacity: 1; }
                }
                @keyframes popupZoomOut {
                    from { transform: scale(1); opacity: 1; }
                    to { transform: scale(1.12); opacity: 0; }
                }
                "#}
            </style>
        </div>
    }
}

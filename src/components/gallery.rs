use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::lightbox::Lightbox;

/// Image swap happens at the midpoint of this fade.
const FADE_MS: u32 = 150;
/// Minimum horizontal travel for a swipe to count.
const SWIPE_THRESHOLD: i32 = 50;
/// Per-item delay for the grid's entrance stagger.
const STAGGER_MS: usize = 100;

fn set_scroll_lock(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let style = if locked { "overflow: hidden;" } else { "" };
        let _ = body.set_attribute("style", style);
    }
}

#[derive(Properties, PartialEq)]
pub struct GallerySectionProps {
    pub on_back: Callback<()>,
}

/// Image grid plus its lightbox modal. The lightbox machine sits in a mut
/// ref so the document-level key and touch listeners, registered once, act
/// on current state; the rendered copy lags it only during the image fade.
#[function_component(GallerySection)]
pub fn gallery_section(props: &GallerySectionProps) -> Html {
    let machine = use_mut_ref(|| Lightbox::new(config::GALLERY_IMAGES.len()));
    let view = use_state(|| Lightbox::new(config::GALLERY_IMAGES.len()));
    let image_hidden = use_state(|| false);
    let fade_timer = use_mut_ref(|| None::<Timeout>);
    let failed = use_state(|| vec![false; config::GALLERY_IMAGES.len()]);
    let touch_start = use_mut_ref(|| (0i32, 0i32));

    let open = {
        let machine = machine.clone();
        let view = view.clone();
        let image_hidden = image_hidden.clone();
        Callback::from(move |index: usize| {
            if machine.borrow_mut().open_at(index) {
                view.set(*machine.borrow());
                image_hidden.set(false);
                set_scroll_lock(true);
            }
        })
    };

    let close_lightbox = {
        let machine = machine.clone();
        let view = view.clone();
        let fade_timer = fade_timer.clone();
        Callback::from(move |_: ()| {
            machine.borrow_mut().close();
            view.set(*machine.borrow());
            fade_timer.borrow_mut().take();
            set_scroll_lock(false);
        })
    };

    // true navigates forward. The machine moves immediately; the rendered
    // image follows once the fade-out has run, so the src swaps while the
    // old picture is invisible.
    let navigate = {
        let machine = machine.clone();
        let view = view.clone();
        let image_hidden = image_hidden.clone();
        let fade_timer = fade_timer.clone();
        Callback::from(move |forward: bool| {
            let moved = {
                let mut lightbox = machine.borrow_mut();
                if forward {
                    lightbox.next()
                } else {
                    lightbox.previous()
                }
            };
            if !moved {
                return;
            }
            image_hidden.set(true);
            let timeout = {
                let machine = machine.clone();
                let view = view.clone();
                let image_hidden = image_hidden.clone();
                Timeout::new(FADE_MS, move || {
                    view.set(*machine.borrow());
                    image_hidden.set(false);
                })
            };
            fade_timer.borrow_mut().replace(timeout);
        })
    };

    {
        let machine = machine.clone();
        let close_lightbox = close_lightbox.clone();
        let navigate = navigate.clone();
        let touch_start = touch_start.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());

                let keydown = document.as_ref().map(|document| {
                    let machine = machine.clone();
                    let close_lightbox = close_lightbox.clone();
                    let navigate = navigate.clone();
                    let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                        if !machine.borrow().is_open() {
                            return;
                        }
                        match event.key().as_str() {
                            "Escape" => close_lightbox.emit(()),
                            "ArrowLeft" => navigate.emit(false),
                            "ArrowRight" => navigate.emit(true),
                            _ => {}
                        }
                    })
                        as Box<dyn FnMut(_)>);
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                    closure
                });

                let touchstart = document.as_ref().map(|document| {
                    let touch_start = touch_start.clone();
                    let closure = Closure::wrap(Box::new(move |event: web_sys::TouchEvent| {
                        if let Some(touch) = event.changed_touches().get(0) {
                            *touch_start.borrow_mut() = (touch.screen_x(), touch.screen_y());
                        }
                    })
                        as Box<dyn FnMut(_)>);
                    let _ = document.add_event_listener_with_callback(
                        "touchstart",
                        closure.as_ref().unchecked_ref(),
                    );
                    closure
                });

                let touchend = document.as_ref().map(|document| {
                    let machine = machine.clone();
                    let navigate = navigate.clone();
                    let touch_start = touch_start.clone();
                    let closure = Closure::wrap(Box::new(move |event: web_sys::TouchEvent| {
                        if !machine.borrow().is_open() {
                            return;
                        }
                        if let Some(touch) = event.changed_touches().get(0) {
                            let (start_x, start_y) = *touch_start.borrow();
                            let dx = touch.screen_x() - start_x;
                            let dy = touch.screen_y() - start_y;
                            if dx.abs() > SWIPE_THRESHOLD && dx.abs() > dy.abs() {
                                navigate.emit(dx < 0);
                            }
                        }
                    })
                        as Box<dyn FnMut(_)>);
                    let _ = document.add_event_listener_with_callback(
                        "touchend",
                        closure.as_ref().unchecked_ref(),
                    );
                    closure
                });

                move || {
                    if let Some(document) = document {
                        if let Some(closure) = keydown {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                closure.as_ref().unchecked_ref(),
                            );
                        }
                        if let Some(closure) = touchstart {
                            let _ = document.remove_event_listener_with_callback(
                                "touchstart",
                                closure.as_ref().unchecked_ref(),
                            );
                        }
                        if let Some(closure) = touchend {
                            let _ = document.remove_event_listener_with_callback(
                                "touchend",
                                closure.as_ref().unchecked_ref(),
                            );
                        }
                    }
                    set_scroll_lock(false);
                }
            },
            (),
        );
    }

    let on_error = {
        let failed = failed.clone();
        Callback::from(move |index: usize| {
            let mut flags = (*failed).clone();
            if let Some(flag) = flags.get_mut(index) {
                *flag = true;
            }
            failed.set(flags);
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let items = config::GALLERY_IMAGES
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let onclick = {
                let open = open.clone();
                Callback::from(move |_: MouseEvent| open.emit(index))
            };
            let onerror = {
                let on_error = on_error.clone();
                Callback::from(move |_: Event| on_error.emit(index))
            };
            let broken = failed.get(index).copied().unwrap_or(false);
            html! {
                <div
                    key={index.to_string()}
                    class="gallery-item"
                    style={format!("animation-delay: {}ms", index * STAGGER_MS)}
                    onclick={onclick}
                >
                    { if broken {
                        html! { <div class="image-placeholder">{ "Image not available" }</div> }
                    } else {
                        html! {
                            <img
                                src={image.src}
                                alt={image.alt}
                                loading="lazy"
                                onerror={onerror}
                            />
                        }
                    } }
                    <div class="gallery-overlay">
                        <span class="view-icon">{ "👁" }</span>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let modal = if view.is_open() {
        match config::GALLERY_IMAGES.get(view.index()) {
            Some(image) => {
                let close = {
                    let close_lightbox = close_lightbox.clone();
                    Callback::from(move |_: MouseEvent| close_lightbox.emit(()))
                };
                let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());
                let previous = {
                    let navigate = navigate.clone();
                    Callback::from(move |_: MouseEvent| navigate.emit(false))
                };
                let next = {
                    let navigate = navigate.clone();
                    Callback::from(move |_: MouseEvent| navigate.emit(true))
                };
                html! {
                    <div class="modal-overlay" onclick={close.clone()}>
                        <div class="modal-content" onclick={keep_open}>
                            <button class="modal-close" onclick={close}>{ "×" }</button>
                            <img
                                class={classes!("modal-image", (*image_hidden).then(|| "fading"))}
                                src={image.src}
                                alt={image.alt}
                            />
                            <button class="modal-nav modal-prev" onclick={previous}>{ "‹" }</button>
                            <button class="modal-nav modal-next" onclick={next}>{ "›" }</button>
                        </div>
                    </div>
                }
            }
            None => html! {},
        }
    } else {
        html! {}
    };

    html! {
        <>
            <div class="gallery-header">
                <h2>{ "The Collection" }</h2>
                <button class="ghost-btn" onclick={on_back}>{ "Back" }</button>
            </div>
            <div class="gallery-grid">
                { items }
            </div>
            { modal }
            <style>
                {r#"
                .gallery-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    max-width: 1080px;
                    margin-bottom: 2rem;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 1.2rem;
                    width: 100%;
                    max-width: 1080px;
                }
                .gallery-item {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    border-radius: 12px;
                    background: var(--bg-secondary);
                    cursor: pointer;
                    animation: fadeRise 0.6s ease-out both;
                }
                .gallery-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.4s ease;
                }
                .gallery-item:hover img {
                    transform: scale(1.05);
                }
                .image-placeholder {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    height: 100%;
                    color: var(--text-secondary);
                    font-size: 0.9rem;
                }
                .gallery-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(4, 4, 10, 0.45);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-item:hover .gallery-overlay {
                    opacity: 1;
                }
                .view-icon {
                    font-size: 1.8rem;
                }
                @keyframes fadeRise {
                    from { transform: translateY(24px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 1100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(4, 4, 10, 0.9);
                    animation: modalFadeIn 0.15s ease-out;
                }
                .modal-content {
                    position: relative;
                    max-width: min(920px, calc(100vw - 3rem));
                }
                .modal-image {
                    display: block;
                    max-width: 100%;
                    max-height: 80vh;
                    border-radius: 10px;
                    transition: opacity 0.15s ease;
                }
                .modal-image.fading {
                    opacity: 0;
                }
                .modal-close {
                    position: absolute;
                    top: -2.4rem;
                    right: 0;
                    background: none;
                    border: none;
                    color: var(--text-primary);
                    font-size: 1.8rem;
                }
                .modal-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 2.6rem;
                    height: 2.6rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.12);
                    color: var(--text-primary);
                    font-size: 1.6rem;
                    line-height: 1;
                }
                .modal-nav:hover {
                    background: rgba(255, 255, 255, 0.24);
                }
                .modal-prev { left: -3.4rem; }
                .modal-next { right: -3.4rem; }
                @keyframes modalFadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @media (max-width: 700px) {
                    .modal-prev { left: 0.4rem; }
                    .modal-next { right: 0.4rem; }
                }
                "#}
            </style>
        </>
    }
}

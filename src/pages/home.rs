use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::clock::TimeDisplay;
use crate::components::counter::VisitorCounter;
use crate::components::gallery::GallerySection;
use crate::components::notification::Notification;
use crate::components::popup::GalleryPopup;
use crate::components::typewriter::TypewriterText;
use crate::config;
use crate::visitor;

/// How long the brand mark holds before the site fades in under it.
const INTRO_BRAND_MS: u32 = 4_950;
const INTRO_FADE_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Landing,
    Gallery,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum IntroStage {
    Brand,
    Fading,
    Done,
}

#[function_component(Home)]
pub fn home() -> Html {
    let intro = use_state(|| IntroStage::Brand);
    let section = use_state(|| Section::Landing);
    let popup_open = use_state(|| false);
    let notice = use_state(|| None::<String>);
    let visitors = use_state(|| 0u64);

    {
        let visitors = visitors.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("data-theme", "dark");
                }
                visitors.set(visitor::increment(visitor::load()));
                || ()
            },
            (),
        );
    }

    {
        let stage_now = *intro;
        let intro = intro.clone();
        use_effect_with_deps(
            move |&stage| {
                let timeout = match stage {
                    IntroStage::Brand => Some(Timeout::new(INTRO_BRAND_MS, move || {
                        intro.set(IntroStage::Fading)
                    })),
                    IntroStage::Fading => Some(Timeout::new(INTRO_FADE_MS, move || {
                        intro.set(IntroStage::Done)
                    })),
                    IntroStage::Done => None,
                };
                move || drop(timeout)
            },
            stage_now,
        );
    }

    let open_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: MouseEvent| popup_open.set(true))
    };
    let close_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_: ()| popup_open.set(false))
    };
    let granted = {
        let popup_open = popup_open.clone();
        let section = section.clone();
        let notice = notice.clone();
        Callback::from(move |_: ()| {
            popup_open.set(false);
            section.set(Section::Gallery);
            notice.set(Some(config::ACCESS_GRANTED_MESSAGE.to_string()));
        })
    };
    let back = {
        let section = section.clone();
        Callback::from(move |_: ()| section.set(Section::Landing))
    };
    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    html! {
        <>
            { if *intro != IntroStage::Done {
                html! {
                    <div class={classes!(
                        "logo-intro",
                        (*intro == IntroStage::Fading).then(|| "fade-out"),
                    )}>
                        <div class="intro-brand">
                            <h1 class="intro-title">{ "SIGMATIC" }</h1>
                            <div class="intro-underline"></div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            } }
            <div class={classes!(
                "main-site",
                (*intro != IntroStage::Brand).then(|| "revealed"),
            )}>
                <section class={classes!(
                    "landing-page",
                    (*section == Section::Gallery).then(|| "hidden"),
                )}>
                    <div class="hero">
                        <h1 class="brand-title">{ "SIGMATIC" }</h1>
                        <TypewriterText />
                        <div class="hero-meta">
                            <TimeDisplay />
                            <div class="visitor-badge">
                                <VisitorCounter value={*visitors} />
                                <span class="visitor-label">{ "visitors" }</span>
                            </div>
                        </div>
                        <button class="primary-btn access-btn" onclick={open_popup}>
                            { "Access Gallery" }
                        </button>
                    </div>
                </section>
                <section class={classes!(
                    "gallery-section",
                    (*section == Section::Landing).then(|| "hidden"),
                )}>
                    <GallerySection on_back={back} />
                </section>
            </div>
            <GalleryPopup
                open={*popup_open}
                on_close={close_popup}
                on_granted={granted}
            />
            { if let Some(message) = (*notice).clone() {
                html! { <Notification message={message} on_dismiss={dismiss_notice} /> }
            } else {
                html! {}
            } }
            <style>
                {r#"
                .logo-intro {
                    position: fixed;
                    inset: 0;
                    z-index: 2000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--bg-primary);
                    transition: opacity 0.5s ease, transform 0.5s ease, filter 0.5s ease;
                }
                .logo-intro.fade-out {
                    opacity: 0;
                    transform: scale(1.05);
                    filter: blur(3px);
                    pointer-events: none;
                }
                .intro-brand {
                    text-align: center;
                }
                .intro-title {
                    font-size: clamp(2.6rem, 9vw, 5rem);
                    font-weight: 800;
                    background: var(--gradient-primary);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    animation: logoReveal 2.4s ease-out forwards;
                }
                .intro-underline {
                    height: 3px;
                    margin-top: 0.8rem;
                    background: var(--gradient-primary);
                    transform: scaleX(0);
                    animation: underlineGrow 1.2s ease-out 1.6s forwards;
                }
                @keyframes logoReveal {
                    from { letter-spacing: 0.6em; opacity: 0; }
                    to { letter-spacing: 0.15em; opacity: 1; }
                }
                @keyframes underlineGrow {
                    from { transform: scaleX(0); }
                    to { transform: scaleX(1); }
                }
                .main-site {
                    opacity: 0;
                }
                .main-site.revealed {
                    animation: siteAppear 1.2s cubic-bezier(0.165, 0.84, 0.44, 1) forwards;
                }
                @keyframes siteAppear {
                    from { opacity: 0; transform: translateY(16px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.6rem;
                    text-align: center;
                }
                .brand-title {
                    font-size: clamp(2.4rem, 8vw, 4.4rem);
                    font-weight: 800;
                    letter-spacing: 0.15em;
                    background: var(--gradient-primary);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-meta {
                    display: flex;
                    align-items: center;
                    gap: 2.4rem;
                }
                .visitor-badge {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.15rem;
                }
                .visitor-count {
                    font-size: 1.4rem;
                    font-variant-numeric: tabular-nums;
                }
                .visitor-label {
                    font-size: 0.85rem;
                    color: var(--text-secondary);
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                }
                .access-btn {
                    margin-top: 0.8rem;
                }
                "#}
            </style>
        </>
    }
}

use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Live clock shown in the hero, refreshed once a second. The interval is
/// dropped on unmount so no tick outlives the component.
#[function_component(TimeDisplay)]
pub fn time_display() -> Html {
    let now = use_state(Local::now);

    {
        let now = now.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || now.set(Local::now()));
                move || drop(interval)
            },
            (),
        );
    }

    let time_text = now.format("%H:%M:%S").to_string();
    let date_text = now.format("%a, %b %-d").to_string();

    html! {
        <div class="time-display">
            <span class="time-text">{ time_text }</span>
            <span class="date-text">{ date_text }</span>
            <style>
                {r#"
                .time-display {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.15rem;
                }
                .time-text {
                    font-size: 1.4rem;
                    font-variant-numeric: tabular-nums;
                    letter-spacing: 0.08em;
                }
                .date-text {
                    font-size: 0.85rem;
                    color: var(--text-secondary);
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                }
                "#}
            </style>
        </div>
    }
}

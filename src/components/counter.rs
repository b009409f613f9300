use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use yew::prelude::*;

const COUNT_ANIMATION_MS: f64 = 1_000.0;

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Value shown `progress` of the way through an animation from `start`
/// to `target`. Progress outside 0..=1 clamps to the endpoints.
fn eased_value(start: u64, target: u64, progress: f64) -> u64 {
    if progress <= 0.0 {
        return start;
    }
    if progress >= 1.0 {
        return target;
    }
    let eased = ease_out_cubic(progress);
    let span = target as f64 - start as f64;
    (start as f64 + span * eased).floor() as u64
}

#[derive(Properties, PartialEq)]
pub struct VisitorCounterProps {
    pub value: u64,
}

/// Animated visitor tally. Whenever `value` changes the displayed number
/// eases from its current reading up to the new one over one second.
#[function_component(VisitorCounter)]
pub fn visitor_counter(props: &VisitorCounterProps) -> Html {
    let shown = use_state(|| 0u64);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |&target| {
                let start = *shown;
                let setter = shown.setter();
                let started = js_sys::Date::now();

                let raf_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
                let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));

                {
                    let raf_id = raf_id.clone();
                    let tick_handle = tick.clone();
                    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        let progress = (js_sys::Date::now() - started) / COUNT_ANIMATION_MS;
                        setter.set(eased_value(start, target, progress));
                        if progress < 1.0 {
                            if let (Some(window), Some(closure)) =
                                (web_sys::window(), tick_handle.borrow().as_ref())
                            {
                                if let Ok(id) = window
                                    .request_animation_frame(closure.as_ref().unchecked_ref())
                                {
                                    *raf_id.borrow_mut() = Some(id);
                                }
                            }
                        }
                    }) as Box<dyn FnMut()>));
                }

                if let (Some(window), Some(closure)) = (web_sys::window(), tick.borrow().as_ref())
                {
                    if let Ok(id) =
                        window.request_animation_frame(closure.as_ref().unchecked_ref())
                    {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }

                move || {
                    if let (Some(window), Some(id)) = (web_sys::window(), raf_id.borrow_mut().take())
                    {
                        let _ = window.cancel_animation_frame(id);
                    }
                    tick.borrow_mut().take();
                }
            },
            props.value,
        );
    }

    html! {
        <span class="visitor-count">{ shown.to_string() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(eased_value(0, 120, 0.0), 0);
        assert_eq!(eased_value(0, 120, 1.0), 120);
        assert_eq!(eased_value(40, 40, 0.5), 40);
    }

    #[test]
    fn out_of_range_progress_clamps() {
        assert_eq!(eased_value(10, 90, -0.3), 10);
        assert_eq!(eased_value(10, 90, 2.0), 90);
    }

    #[test]
    fn grows_monotonically_toward_target() {
        let mut last = 0;
        for step in 0..=10 {
            let value = eased_value(0, 1_000, f64::from(step) / 10.0);
            assert!(value >= last, "dipped at step {step}");
            last = value;
        }
        assert_eq!(last, 1_000);
    }

    #[test]
    fn eases_faster_early_than_late() {
        let first_half = eased_value(0, 1_000, 0.5);
        assert!(first_half > 500, "ease-out should front-load growth");
    }
}

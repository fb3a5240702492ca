use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

use crate::countup::{self, CountUp, Stat, DURATION_MS, TICK_MS};

#[derive(Properties, PartialEq)]
pub struct MilestonesProps {
    pub stats: Vec<Stat>,
}

/// Milestones section. Watches window scroll until the section's bounding box
/// first intersects the viewport, then flips `visible` for good — the count-up
/// runs once per mount and does not restart on re-entry.
#[function_component(Milestones)]
pub fn milestones(props: &MilestonesProps) -> Html {
    let section_ref = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let section_ref = section_ref.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(section) = section_ref.cast::<Element>() {
                        let rect = section.get_bounding_client_rect();
                        let viewport_height =
                            window_clone.inner_height().unwrap().as_f64().unwrap();
                        if rect.top() <= viewport_height && rect.bottom() >= 0.0 {
                            visible.set(true);
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // The section may already be on screen before any scroll happens.
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <section ref={section_ref} class="milestones" id="milestones">
            <div class="milestones-content">
                <div class="milestones-text">
                    <h2>{"Milestones"}</h2>
                    <p>
                        {"Mid-term rental shouldn't be treated the same way as long term \
                          rental. MoveHere is a subscription based platform designed for \
                          digital nomads and travelers, offering seamless booking for \
                          mid-term accommodations. Our goal is to provide a convenient and \
                          flexible solution for remote professionals while not sacrificing \
                          the protections to owner's properties."}
                    </p>
                </div>
                <div class="milestones-grid">
                    {
                        for props.stats.iter().map(|stat| html! {
                            <MilestoneCard
                                key={stat.label.clone()}
                                stat={stat.clone()}
                                active={*visible}
                            />
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MilestoneCardProps {
    pub stat: Stat,
    pub active: bool,
}

/// A single stat card. While idle it shows 0; once `active` flips true it
/// drives a [`CountUp`] off a repeating interval, dropping the interval handle
/// on terminal state, on unmount, and whenever the target changes.
#[function_component(MilestoneCard)]
pub fn milestone_card(props: &MilestoneCardProps) -> Html {
    let current = use_state(|| 0u64);

    {
        let current = current.clone();
        use_effect_with_deps(
            move |(active, target)| {
                let interval_handle: Rc<RefCell<Option<Interval>>> =
                    Rc::new(RefCell::new(None));

                if *active {
                    let mut counter = CountUp::new(*target, DURATION_MS, TICK_MS);
                    let handle = interval_handle.clone();
                    *interval_handle.borrow_mut() = Some(Interval::new(TICK_MS, move || {
                        current.set(counter.tick());
                        if counter.is_done() {
                            if let Some(interval) = handle.borrow_mut().take() {
                                drop(interval);
                            }
                        }
                    }));
                }

                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (props.active, props.stat.value),
        );
    }

    html! {
        <div class="milestone-card">
            <div class="milestone-number">
                { countup::format_grouped(*current) }{"+"}
            </div>
            <div class="milestone-label">{ props.stat.label.clone() }</div>
        </div>
    }
}

use log::warn;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::effects::observer::watch_intersections;

/// Counts from zero to `target` in fixed ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTicker {
    target: u32,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterTicker {
    pub fn new(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(tick_ms.max(1));
        Self {
            target,
            increment: f64::from(target) / ticks,
            current: 0.0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances one tick and returns the number to display.
    pub fn tick(&mut self) -> u32 {
        if self.done {
            return self.target;
        }
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.done = true;
            self.target
        } else {
            self.current.floor() as u32
        }
    }
}

/// Interval period for the counter; 0 cancels the interval.
pub fn tick_delay(started: bool, finished: bool) -> u32 {
    if started && !finished {
        config::COUNTER_TICK_MS
    } else {
        0
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let shown = use_state(|| 0u32);
    let started = use_state(|| false);
    let finished = use_state(|| false);
    let ticker = {
        let target = props.target;
        use_mut_ref(move || {
            CounterTicker::new(target, config::COUNTER_DURATION_MS, config::COUNTER_TICK_MS)
        })
    };

    // Start the first time at least half of the number is visible.
    {
        let started = started.clone();
        use_effect_with_deps(
            move |node| {
                let guard = node.cast::<web_sys::Element>().and_then(|el| {
                    let guard = watch_intersections(
                        config::COUNTER_VISIBLE_THRESHOLD,
                        None,
                        move |target, observer| {
                            observer.unobserve(&target);
                            started.set(true);
                        },
                    )
                    .map_err(|e| warn!("Counter observer unavailable: {:?}", e))
                    .ok()?;
                    guard.observe(&el);
                    Some(guard)
                });
                move || drop(guard)
            },
            node.clone(),
        );
    }

    {
        let ticker = ticker.clone();
        let shown = shown.clone();
        let delay = tick_delay(*started, *finished);
        let finished = finished.clone();
        use_interval(
            move || {
                let mut ticker = ticker.borrow_mut();
                shown.set(ticker.tick());
                if ticker.is_done() {
                    finished.set(true);
                }
            },
            delay,
        );
    }

    html! {
        <div class="stat-item" data-aos="fade-up">
            <div
                ref={node}
                class={classes!("stat-number", (*started).then(|| "animated"))}
                data-target={props.target.to_string()}
            >
                { *shown }{ props.suffix.clone() }
            </div>
            <div class="stat-label">{ props.label.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_one_per_tick_when_target_matches_tick_count() {
        // 2000 ms / 16 ms = 125 ticks
        let mut ticker = CounterTicker::new(125, 2_000, 16);
        assert_eq!(ticker.tick(), 1);
        assert_eq!(ticker.tick(), 2);
        assert!(!ticker.is_done());
    }

    #[test]
    fn lands_exactly_on_target_and_stops() {
        let mut ticker = CounterTicker::new(98, 2_000, 16);
        let mut last = 0;
        let mut ticks = 0;
        while !ticker.is_done() {
            let value = ticker.tick();
            assert!(value >= last);
            last = value;
            ticks += 1;
        }
        assert_eq!(last, 98);
        assert!(ticks <= 126);
        assert_eq!(ticker.tick(), 98);
    }

    #[test]
    fn shows_floor_of_running_value() {
        let mut ticker = CounterTicker::new(10, 2_000, 16);
        // 0.08 per tick
        for _ in 0..12 {
            assert_eq!(ticker.tick(), 0);
        }
        assert_eq!(ticker.tick(), 1);
    }

    #[test]
    fn interval_runs_only_while_counting() {
        assert_eq!(tick_delay(false, false), 0);
        assert_eq!(tick_delay(true, false), 16);

        let mut ticker = CounterTicker::new(40, 2_000, 16);
        while !ticker.is_done() {
            assert_eq!(tick_delay(true, ticker.is_done()), 16);
            ticker.tick();
        }
        assert_eq!(tick_delay(true, ticker.is_done()), 0);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut ticker = CounterTicker::new(0, 2_000, 16);
        assert_eq!(ticker.tick(), 0);
        assert!(ticker.is_done());
    }
}

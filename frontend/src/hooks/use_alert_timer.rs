use gloo::timers::callback::Timeout;
use shared::{AlertFlag, ALERT_TIMEOUT_MS};
use yew::prelude::*;

/// Hides the alert `ALERT_TIMEOUT_MS` after it was raised.
///
/// The timer belongs to the effect: raising again or unmounting runs the
/// cleanup, which drops and thereby cancels the pending `Timeout`.
#[hook]
pub fn use_alert_timer(alert: AlertFlag, on_expire: Callback<u64>) {
    use_effect_with(alert, move |alert| {
        let generation = alert.generation();
        let timeout = alert
            .is_visible()
            .then(|| Timeout::new(ALERT_TIMEOUT_MS, move || on_expire.emit(generation)));

        move || drop(timeout)
    });
}

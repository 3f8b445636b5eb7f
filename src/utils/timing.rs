use std::time::Duration;

/// Formats an elapsed run time the way the final summary line reports it.
/// Runs under a minute show fractional seconds; longer runs switch to
/// minute and hour granularity.
pub fn format_duration(elapsed: Duration) -> String {
    let run_time = elapsed.as_secs_f64();

    if run_time > 3659.0 {
        let hours = (run_time / 3600.0).floor();
        format!(
            "{:.0} hours, {:.0} minutes and {:.0} secs",
            hours,
            (run_time - hours * 3600.0) / 60.0,
            run_time % 60.0
        )
    } else if run_time > 59.0 {
        format!("{:.0} minutes and {:.0} secs", run_time / 60.0, run_time % 60.0)
    } else {
        format!("{:.2} secs", run_time)
    }
}

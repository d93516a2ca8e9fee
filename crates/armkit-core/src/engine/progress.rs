#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `phase` between a `PhaseStart` and a `PhaseFinish` event.
    ///
    /// `PhaseFinish` is only reported when the phase succeeds.
    pub fn phase<T, E>(&self, name: &'static str, phase: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.report(Progress::PhaseStart { name });
        let result = phase()?;
        self.report(Progress::PhaseFinish);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording(events: &Mutex<Vec<String>>) -> ProgressReporter<'_> {
        ProgressReporter::with_callback(Box::new(move |p| {
            events.lock().unwrap().push(format!("{:?}", p));
        }))
    }

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("ignored".to_string()));
        assert_eq!(reporter.phase("Noop", || Ok::<_, ()>(3)), Ok(3));
    }

    #[test]
    fn successful_phase_is_bracketed() {
        let events = Mutex::new(Vec::new());
        let reporter = recording(&events);
        reporter.phase("Compiling", || Ok::<_, ()>(())).unwrap();
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "PhaseStart { name: \"Compiling\" }".to_string(),
                "PhaseFinish".to_string()
            ]
        );
    }

    #[test]
    fn failed_phase_does_not_report_finish() {
        let events = Mutex::new(Vec::new());
        let reporter = recording(&events);
        let result: Result<(), &str> = reporter.phase("Simulating", || Err("boom"));
        assert_eq!(result, Err("boom"));
        assert_eq!(events.lock().unwrap().len(), 1);
    }
}

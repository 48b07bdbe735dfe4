/// Runs a closure exactly once when the guard goes out of scope,
/// whichever way the enclosing block is left.
pub struct OnDrop<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_runs_once_at_scope_end() {
        let calls = Cell::new(0);
        {
            let _guard = OnDrop::new(|| calls.set(calls.get() + 1));
            assert_eq!(calls.get(), 0);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_runs_on_early_return() {
        fn fallible(calls: &Cell<u32>, fail: bool) -> Result<(), ()> {
            let _guard = OnDrop::new(|| calls.set(calls.get() + 1));
            if fail {
                return Err(());
            }
            Ok(())
        }

        let calls = Cell::new(0);
        assert!(fallible(&calls, true).is_err());
        assert!(fallible(&calls, false).is_ok());
        assert_eq!(calls.get(), 2);
    }
}

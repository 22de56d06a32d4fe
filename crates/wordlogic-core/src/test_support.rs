//! Instrumented predicates shared by evaluation-order tests.

use crate::predicate::DeferredPredicate;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

///
/// Probe
///
/// Constant predicate that counts its own invocations.
/// Clones share the counter.
///

#[derive(Clone, Debug)]
pub(crate) struct Probe {
    value: bool,
    calls: Rc<Cell<u32>>,
}

impl Probe {
    pub(crate) fn new(value: bool) -> Self {
        Self {
            value,
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl DeferredPredicate for Probe {
    fn test(&self) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.value
    }
}

///
/// Journal
///
/// Records the order in which labelled predicates run.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Journal {
    entries: Rc<RefCell<Vec<&'static str>>>,
}

impl Journal {
    pub(crate) fn leaf(&self, label: &'static str, value: bool) -> impl Fn() -> bool + 'static {
        let entries = Rc::clone(&self.entries);
        move || {
            entries.borrow_mut().push(label);
            value
        }
    }

    pub(crate) fn entries(&self) -> Vec<&'static str> {
        self.entries.borrow().clone()
    }
}

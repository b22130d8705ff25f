use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Flag that flips to `false` when the component unmounts.
///
/// Async fetches check it before touching state so late responses are dropped.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }
}

#[hook]
pub fn use_is_mounted() -> MountGuard {
    let flag: Rc<Cell<bool>> = (*use_memo((), |_| Rc::new(Cell::new(true)))).clone();
    {
        let flag = Rc::clone(&flag);
        use_effect_with((), move |_| {
            flag.set(true);
            move || flag.set(false)
        });
    }
    MountGuard(flag)
}

/// Set while a request started by the component is outstanding.
///
/// Lives outside component state, so events that fire before the next render
/// still see it.
#[derive(Clone, Debug, Default)]
pub struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    /// Claims the slot. `false` means a request is already running.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn finish(&self) {
        self.0.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }
}

#[hook]
pub fn use_in_flight() -> InFlight {
    (*use_memo((), |_| InFlight::default())).clone()
}

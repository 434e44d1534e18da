use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Mutable page state owned by a component. Every `update` re-renders the
/// owning component, so closures held by timers and window listeners always
/// act on the current state instead of a captured snapshot.
pub struct StateHandle<T> {
    state: Rc<RefCell<T>>,
    refresh: UseForceUpdateHandle,
}

impl<T> StateHandle<T> {
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.refresh.force_update();
        result
    }
}

impl<T> Clone for StateHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<T> PartialEq for StateHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

#[hook]
pub fn use_state_handle<T, F>(init: F) -> StateHandle<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let state = use_mut_ref(init);
    let refresh = use_force_update();
    StateHandle { state, refresh }
}

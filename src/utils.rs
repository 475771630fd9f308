use std::panic;

/// Cut-down version of the take_mut crate.
///
/// Lets a `&mut Self` be consumed by value and rebuilt, which is what a state
/// transition on an enum behind a mutable reference needs. The closure must
/// hand back a replacement value; if it panics instead the process aborts,
/// since the referent would otherwise be left uninitialised.
///
/// # Example
/// ```
/// use vulkan_primer::utils::ReplaceWith;
///
/// enum State {
///     Waiting,
///     Running,
/// }
///
/// impl<F> ReplaceWith<F> for State {}
///
/// let mut state = State::Waiting;
/// state.replace_with(|state| {
///     drop(state);
///     State::Running
/// });
/// ```
pub trait ReplaceWith<F> {
    fn replace_with(&mut self, closure: F)
    where
        F: FnOnce(Self) -> Self,
        Self: Sized,
    {
        use std::ptr;

        unsafe {
            let old_t = ptr::read(self);
            let new_t = panic::catch_unwind(panic::AssertUnwindSafe(|| closure(old_t)))
                .unwrap_or_else(|_| ::std::process::abort());
            ptr::write(self, new_t);
        }
    }
}

#[test]
fn replace_with_test() {
    #[derive(PartialEq, Eq, Debug)]
    enum Foo {
        Bar,
        Baz,
    }

    impl<F> ReplaceWith<F> for Foo {}

    let mut foo = Foo::Bar;
    let bar: &mut Foo = &mut foo;
    bar.replace_with(|foo| {
        drop(foo);
        Foo::Baz
    });

    assert_eq!(&foo, &Foo::Baz);
}

use super::navigator::Navigator;
use crate::host::Host;
use crate::options::Options;

/// Something that reacts to the host's per-frame input tick.
pub trait InputProcessor {
    /// Handle the current frame. Returning `true` consumes the input and
    /// stops later processors from seeing it.
    fn process_input(&mut self) -> bool;
}

/// Runs registered processors in order until one consumes the input.
#[derive(Default)]
pub struct InputDispatcher {
    processors: Vec<Box<dyn InputProcessor>>,
}

impl InputDispatcher {
    /// Append a processor; earlier registrations run first.
    pub fn register(&mut self, processor: Box<dyn InputProcessor>) {
        self.processors.push(processor);
    }

    /// Number of registered processors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Run one tick. Returns whether any processor consumed the input.
    pub fn dispatch(&mut self) -> bool {
        self.processors.iter_mut().any(|p| p.process_input())
    }
}

/// A [`Navigator`] bound to a host.
pub struct NavigationPlugin<H: Host> {
    host: H,
    navigator: Navigator,
}

impl<H: Host> NavigationPlugin<H> {
    /// Load the host spec data and build the navigator.
    #[must_use]
    pub fn new(host: H, options: &Options) -> Self {
        let navigator = Navigator::load(options, &host);
        Self { host, navigator }
    }

    /// The bound host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the bound host, e.g. to feed input events.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The navigation state machine.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Release the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H: Host> InputProcessor for NavigationPlugin<H> {
    fn process_input(&mut self) -> bool {
        let parts = self.host.parts();
        let consumed = self
            .navigator
            .process_input(&parts.input, parts.rig, &parts.picker);
        self.host.end_frame();
        consumed
    }
}

//! Platform detection and task spawning helpers.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }
}

/// Spawn a detached future that is not tied to any component scope.
///
/// Must be called from inside the Dioxus runtime (event handlers, hooks).
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn_forever(future);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_tests_run_as_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
        assert_eq!(Platform::current().label(), "desktop");
    }
}

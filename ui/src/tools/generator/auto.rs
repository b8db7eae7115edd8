//! Auto-generate state machine.
//!
//! Every `enable` opens a new epoch. Timer loops carry the epoch they were
//! armed with and stop on the first tick that no longer matches.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoState {
    #[default]
    Idle,
    Running {
        epoch: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutoGenerate {
    state: AutoState,
    next_epoch: u64,
}

impl AutoGenerate {
    /// Enter `Running` and return the epoch the new timer must carry.
    /// Re-enabling supersedes the previous epoch.
    pub fn enable(&mut self) -> u64 {
        self.next_epoch = self.next_epoch.wrapping_add(1);
        let epoch = self.next_epoch;
        self.state = AutoState::Running { epoch };
        epoch
    }

    pub fn disable(&mut self) {
        self.state = AutoState::Idle;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoState::Running { .. })
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.state == AutoState::Running { epoch }
    }

    pub fn state(&self) -> AutoState {
        self.state
    }
}

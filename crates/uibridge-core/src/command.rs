//! The UI-command batch: a fixed run of records the managed side decodes.

/// Number of records in every batch produced by [`ui_command_batch`].
///
/// Producer-supplied, not computed from input. The decoder on the managed
/// side reads whatever count the producer reports, so this constant is free
/// to change without breaking the wire contract.
pub const UI_COMMAND_BATCH_LEN: usize = 10;

/// One UI command as the core crate sees it.
///
/// The C-layout mirror that actually crosses the boundary lives in
/// `uibridge-ffi`; this type carries the semantics only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiCommand {
    /// Integer payload. Record *i* of a batch carries *i*.
    pub data: i64,
    /// Floating payload. Record *i* of a batch carries *i* + 0.1.
    pub fraction: f64,
}

/// Produce one batch of [`UI_COMMAND_BATCH_LEN`] commands.
///
/// The fill is deterministic and purely illustrative: record *i* gets
/// `data = i` and `fraction = i + 0.1`. Every call returns a fresh,
/// independently owned batch.
pub fn ui_command_batch() -> Vec<UiCommand> {
    (0..UI_COMMAND_BATCH_LEN)
        .map(|i| UiCommand {
            data: i as i64,
            fraction: i as f64 + 0.1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_has_fixed_length() {
        assert_eq!(ui_command_batch().len(), UI_COMMAND_BATCH_LEN);
    }

    #[test]
    fn record_i_carries_i_and_i_plus_tenth() {
        for (i, cmd) in ui_command_batch().iter().enumerate() {
            assert_eq!(cmd.data, i as i64);
            assert!((cmd.fraction - (i as f64 + 0.1)).abs() < 1e-9);
        }
    }

    #[test]
    fn batches_are_deterministic() {
        assert_eq!(ui_command_batch(), ui_command_batch());
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AppSettings;
use crate::store::{keys, RecordStore, StorageBackend};

/// Current display settings, falling back to defaults when nothing is
/// stored (or the stored value is unreadable).
pub fn get<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let settings: AppSettings = store.get(keys::APP_SETTINGS);
    Ok(CmdResult::default().with_settings(settings))
}

/// Persist new display settings, overwriting the previous ones.
pub fn save<B: StorageBackend>(
    store: &RecordStore<B>,
    settings: AppSettings,
) -> Result<CmdResult> {
    store.set(keys::APP_SETTINGS, &settings)?;
    let mut result = CmdResult::default().with_settings(settings);
    result.add_message(CmdMessage::success("Settings saved"));
    Ok(result)
}

/// Restore and persist the defaults.
pub fn reset<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let settings = AppSettings::default();
    store.set(keys::APP_SETTINGS, &settings)?;
    let mut result = CmdResult::default().with_settings(settings);
    result.add_message(CmdMessage::success("Settings reset to defaults"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SizeChoice;
    use crate::store::memory::MemBackend;

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        let store = RecordStore::new(MemBackend::new());
        let result = get(&store).unwrap();
        assert_eq!(result.settings, Some(AppSettings::default()));
    }

    #[test]
    fn save_then_get_round_trips() {
        let store = RecordStore::new(MemBackend::new());
        let settings = AppSettings {
            dark_mode: true,
            block_size: SizeChoice::Large,
            font_size: SizeChoice::Small,
        };
        save(&store, settings).unwrap();

        let result = get(&store).unwrap();
        assert_eq!(result.settings, Some(settings));
    }

    #[test]
    fn reset_restores_defaults() {
        let store = RecordStore::new(MemBackend::new());
        save(
            &store,
            AppSettings {
                dark_mode: true,
                block_size: SizeChoice::Small,
                font_size: SizeChoice::Large,
            },
        )
        .unwrap();
        reset(&store).unwrap();

        let result = get(&store).unwrap();
        assert_eq!(result.settings, Some(AppSettings::default()));
    }

    #[test]
    fn corrupt_settings_degrade_to_defaults() {
        let backend = MemBackend::new();
        backend.write(keys::APP_SETTINGS, "not json at all").unwrap();
        let store = RecordStore::new(backend);

        let result = get(&store).unwrap();
        assert_eq!(result.settings, Some(AppSettings::default()));
    }
}

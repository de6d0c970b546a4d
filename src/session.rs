//! Session Bootstrap
//!
//! Picks the starting owned set: a decodable share token in the page URL wins
//! and becomes the new saved baseline, otherwise whatever storage holds.

use crate::config::AppConfig;
use crate::owned::OwnedSet;
use crate::share;
use crate::storage::{KeyValueStore, OwnedStore};

pub fn initial_owned<S: KeyValueStore>(
    store: &OwnedStore<S>,
    search: &str,
    config: &AppConfig,
) -> OwnedSet {
    let shared = share::token_from_query(search, config.share_param)
        .and_then(|token| share::decode(&token, config.catalog_size));

    match shared {
        Some(owned) => {
            tracing::info!(count = owned.len(), "owned set taken from share link");
            store.save(&owned);
            owned
        }
        None => store.load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn setup(saved: Option<&str>) -> (MemoryStorage, OwnedStore<MemoryStorage>, AppConfig) {
        let config = AppConfig::default();
        let storage = MemoryStorage::new();
        if let Some(raw) = saved {
            storage.set(config.storage_key, raw).unwrap();
        }
        let store = OwnedStore::new(storage.clone(), config.storage_key);
        (storage, store, config)
    }

    fn ids(owned: &OwnedSet) -> Vec<u32> {
        owned.iter().collect()
    }

    #[test]
    fn test_storage_used_without_token() {
        let (_, store, config) = setup(Some("[1,4,9]"));

        let owned = initial_owned(&store, "", &config);

        assert_eq!(ids(&owned), vec![1, 4, 9]);
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn test_token_overrides_and_persists() {
        let (storage, store, config) = setup(Some("[1]"));
        let token = share::encode(&[2, 3].into_iter().collect(), config.catalog_size);

        let owned = initial_owned(&store, &format!("?ids={token}"), &config);

        assert_eq!(ids(&owned), vec![2, 3]);
        assert_eq!(storage.get(config.storage_key).as_deref(), Some("[2,3]"));
    }

    #[test]
    fn test_bad_token_falls_back_to_storage() {
        let (storage, store, config) = setup(Some("[1]"));

        let owned = initial_owned(&store, "?ids=%%%bad", &config);

        assert_eq!(ids(&owned), vec![1]);
        assert_eq!(storage.get(config.storage_key).as_deref(), Some("[1]"));
    }

    #[test]
    fn test_empty_token_is_no_token() {
        let (_, store, config) = setup(Some("[7]"));
        assert_eq!(ids(&initial_owned(&store, "?ids=", &config)), vec![7]);
    }

    #[test]
    fn test_cold_start_is_empty() {
        let (_, store, config) = setup(None);
        assert!(initial_owned(&store, "?other=1", &config).is_empty());
    }
}

use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Local storage slot a type is saved under.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            log::debug!("nothing usable at {}: {:?}", T::KEY, err);
            Default::default()
        })
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("Could not save {} to local storage: {:?}", T::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Where session seeds come from: random, or derived from a forced seed so restarts still reshuffle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SeedSource {
    forced: Option<u64>,
    sessions: u64,
}

impl SeedSource {
    pub(crate) const fn new(forced: Option<u64>) -> Self {
        Self {
            forced,
            sessions: 0,
        }
    }

    pub(crate) fn next_seed(&mut self) -> u64 {
        let session = self.sessions;
        self.sessions = self.sessions.wrapping_add(1);
        match self.forced {
            Some(seed) => mix_seed(seed, session),
            None => js_random_seed(),
        }
    }
}

const fn mix_seed(seed: u64, session: u64) -> u64 {
    seed.wrapping_add(session.wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_seed_is_used_for_first_session() {
        let mut seeds = SeedSource::new(Some(42));
        assert_eq!(seeds.next_seed(), 42);
    }

    #[test]
    fn forced_seed_changes_between_sessions() {
        let mut seeds = SeedSource::new(Some(42));
        let first = seeds.next_seed();
        let second = seeds.next_seed();
        assert_ne!(first, second);

        let mut replay = SeedSource::new(Some(42));
        assert_eq!(replay.next_seed(), first);
        assert_eq!(replay.next_seed(), second);
    }
}

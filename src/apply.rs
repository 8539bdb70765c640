use crate::error::Result;
use crate::liquidctl::Adapter;
use crate::profile::{self, Profile, ProfileStore};
use crate::runner::CommandRunner;

/// Look up `name` in the store and push its curve to device `index`.
///
/// Returns the profile that was applied.
pub fn apply_profile<R: CommandRunner>(
    adapter: &Adapter<R>,
    store: &ProfileStore,
    index: u32,
    name: &str,
) -> Result<Profile> {
    let profiles = store.load()?;
    let profile = profile::find_profile(&profiles, name)?.clone();

    for warning in profile::check_curve(&profile.points) {
        log::warn!("profile '{}': {}", profile.name, warning);
    }

    adapter.apply_fan_curve(index, &profile.points)?;
    Ok(profile)
}

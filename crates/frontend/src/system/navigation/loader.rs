use std::future::Future;

use contracts::system::navigation::{MenuEntry, SubMenuEntry};
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::merge::merge_menus;
use crate::shared::api_utils::ApiError;

/// Upper bound for the two menu requests together.
pub const MENU_LOAD_TIMEOUT_MS: u32 = 30_000;

/// Menus of the current session, shared through context.
///
/// `loading` starts `true` so nothing route-dependent renders before the
/// first load has finished. A failed or timed-out load leaves `menus` empty
/// and `loading` false; there is no automatic retry.
#[derive(Clone, Copy)]
pub struct MenuState {
    pub menus: RwSignal<Vec<MenuEntry>>,
    pub loading: RwSignal<bool>,
    generation: RwSignal<u64>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            menus: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            generation: RwSignal::new(0),
        }
    }

    /// Fetch menus and submenus concurrently and publish the merged tree.
    pub fn load(&self) {
        let generation = self.bump_generation();
        self.loading.set(true);
        let this = *self;

        spawn_local(async move {
            let deadline = TimeoutFuture::new(MENU_LOAD_TIMEOUT_MS);
            let result =
                load_with_deadline(api::fetch_menus(), api::fetch_submenus(), deadline).await;
            this.finish(generation, result);
        });
    }

    /// Publish the result of load `generation`. Returns `false` when a newer
    /// load, a reset, or a disposed owner superseded it.
    fn finish(&self, generation: u64, result: Result<Vec<MenuEntry>, ApiError>) -> bool {
        if self.generation.try_get_untracked() != Some(generation) {
            log::debug!("discarding stale menu load #{}", generation);
            return false;
        }

        match result {
            Ok(menus) => {
                log::info!("loaded {} navigation menus", menus.len());
                self.menus.set(menus);
            }
            Err(e) => {
                log::error!("failed to load navigation menus: {}", e);
                self.menus.set(Vec::new());
            }
        }
        self.loading.set(false);
        true
    }

    /// Drop the current session's menus (logout). Pending loads are ignored.
    pub fn reset(&self) {
        self.bump_generation();
        self.menus.set(Vec::new());
        self.loading.set(true);
    }

    fn bump_generation(&self) -> u64 {
        let next = self.generation.get_untracked() + 1;
        self.generation.set(next);
        next
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_menu_state() -> MenuState {
    use_context::<MenuState>().expect("MenuState not provided in context")
}

/// Wait for both lists, then merge; give up with [`ApiError::Timeout`] when
/// `deadline` completes first. The first failing request fails the load.
pub async fn load_with_deadline<M, S, D>(
    menus: M,
    submenus: S,
    deadline: D,
) -> Result<Vec<MenuEntry>, ApiError>
where
    M: Future<Output = Result<Vec<MenuEntry>, ApiError>>,
    S: Future<Output = Result<Vec<SubMenuEntry>, ApiError>>,
    D: Future<Output = ()>,
{
    let both = future::try_join(menus, submenus);
    futures::pin_mut!(both);
    futures::pin_mut!(deadline);

    match future::select(both, deadline).await {
        Either::Left((result, _)) => {
            let (menus, submenus) = result?;
            Ok(merge_menus(menus, submenus))
        }
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

//! Everything the admin can edit, held in one reducer owned by `App`.
//!
//! Edits only touch memory and mark the state dirty; `SiteContent::save`
//! is the single place that writes them to the local store.

use crate::config::keys;
use crate::content::{initial_references, initial_settings, initial_solutions};
use crate::error::StorageError;
use crate::models::{SiteSettings, Solution, VideoKind, VideoReference};
use crate::registry::{Direction, ReferenceField, Registry};
use crate::storage::{load_json, save_json, KeyValueStore};
use log::{debug, warn};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub settings: SiteSettings,
    pub solutions: Vec<Solution>,
    pub registry: Registry,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            settings: initial_settings(),
            solutions: initial_solutions(),
            registry: Registry::new(initial_references()),
        }
    }
}

impl SiteContent {
    /// Stored content, with the seed content standing in for any missing key.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            settings: load_json(store, keys::SETTINGS).unwrap_or_else(initial_settings),
            solutions: load_json(store, keys::SOLUTIONS).unwrap_or_else(initial_solutions),
            registry: Registry::new(load_json(store, keys::REFERENCES).unwrap_or_else(initial_references)),
        }
    }

    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), StorageError> {
        save_json(store, keys::SETTINGS, &self.settings)?;
        save_json(store, keys::SOLUTIONS, &self.solutions)?;
        save_json(store, keys::REFERENCES, self.registry.entries())
    }
}

/// One editable field of [`SiteSettings`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SettingField {
    AgencyName,
    HeroTitle,
    HeroSlogan,
    PrimaryColor,
    SecondaryColor,
    YoutubeUrl,
    InstagramUrl,
    KakaoUrl,
}

impl SettingField {
    pub const ALL: [SettingField; 8] = [
        SettingField::AgencyName,
        SettingField::HeroTitle,
        SettingField::HeroSlogan,
        SettingField::PrimaryColor,
        SettingField::SecondaryColor,
        SettingField::YoutubeUrl,
        SettingField::InstagramUrl,
        SettingField::KakaoUrl,
    ];

    fn slot(self, settings: &mut SiteSettings) -> &mut String {
        match self {
            SettingField::AgencyName => &mut settings.agency_name,
            SettingField::HeroTitle => &mut settings.hero_title,
            SettingField::HeroSlogan => &mut settings.hero_slogan,
            SettingField::PrimaryColor => &mut settings.primary_color,
            SettingField::SecondaryColor => &mut settings.secondary_color,
            SettingField::YoutubeUrl => &mut settings.youtube_url,
            SettingField::InstagramUrl => &mut settings.instagram_url,
            SettingField::KakaoUrl => &mut settings.kakao_url,
        }
    }

    pub fn read(self, settings: &SiteSettings) -> &str {
        match self {
            SettingField::AgencyName => &settings.agency_name,
            SettingField::HeroTitle => &settings.hero_title,
            SettingField::HeroSlogan => &settings.hero_slogan,
            SettingField::PrimaryColor => &settings.primary_color,
            SettingField::SecondaryColor => &settings.secondary_color,
            SettingField::YoutubeUrl => &settings.youtube_url,
            SettingField::InstagramUrl => &settings.instagram_url,
            SettingField::KakaoUrl => &settings.kakao_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionField {
    Title(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteAction {
    UpdateSetting(SettingField, String),
    UpdateSolution(String, SolutionField),
    AddReference(VideoKind),
    UpdateReference(String, ReferenceField),
    /// Result of an asynchronous thumbnail read.
    SetThumbnail(String, String),
    RemoveReference(String),
    MoveReference(String, Direction),
    /// Replaces the whole registry, e.g. with references pulled from the remote file.
    ReplaceReferences(Vec<VideoReference>),
    MarkSaved,
    Reload(SiteContent),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteState {
    pub content: SiteContent,
    /// Set by any edit, cleared by `MarkSaved` and `Reload`.
    pub dirty: bool,
}

impl SiteState {
    pub fn new(content: SiteContent) -> Self {
        Self { content, dirty: false }
    }

    /// Applies one action; returns whether anything changed.
    fn apply(&mut self, action: SiteAction) -> bool {
        let content = &mut self.content;
        match action {
            SiteAction::UpdateSetting(field, value) => {
                let slot = field.slot(&mut content.settings);
                let changed = *slot != value;
                *slot = value;
                changed
            }
            SiteAction::UpdateSolution(id, field) => {
                let Some(solution) = content.solutions.iter_mut().find(|s| s.id == id) else {
                    return false;
                };
                match field {
                    SolutionField::Title(title) => solution.title = title,
                    SolutionField::Description(description) => solution.description = description,
                }
                true
            }
            SiteAction::AddReference(kind) => {
                let id = content.registry.add(kind);
                debug!("Added {} reference {}", kind, id);
                true
            }
            SiteAction::UpdateReference(id, field) => content.registry.update(&id, field),
            SiteAction::SetThumbnail(id, thumbnail) => {
                let applied = content.registry.set_thumbnail(&id, thumbnail);
                if !applied {
                    warn!("Dropping thumbnail for removed reference {}", id);
                }
                applied
            }
            SiteAction::RemoveReference(id) => content.registry.remove(&id).is_some(),
            SiteAction::MoveReference(id, direction) => content.registry.move_entry(&id, direction),
            SiteAction::ReplaceReferences(references) => {
                content.registry = Registry::new(references);
                true
            }
            SiteAction::MarkSaved => {
                self.dirty = false;
                false
            }
            SiteAction::Reload(loaded) => {
                *content = loaded;
                self.dirty = false;
                false
            }
        }
    }
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            next.dirty = true;
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

pub type SiteContext = UseReducerHandle<SiteState>;

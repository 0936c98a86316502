//! User creation/edit form: draft, payload and access toggles.

use serde::Serialize;

use skypass_core::{AccessCatalog, AccessLevel, AccessLevelId, ActiveFlag, ModuleId, UserRecord};

use crate::access::AccessSelection;
use crate::controller::{FormController, FormModel};
use crate::field::{FieldErrors, FormField};
use crate::password::PasswordRequirements;
use crate::validation;

/// Inputs of the user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Email,
    Password,
    Phone,
    Active,
    AccessLevel,
}

impl FormField for UserField {
    fn key(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Password => "password",
            UserField::Phone => "phone",
            UserField::Active => "active",
            UserField::AccessLevel => "access_level",
        }
    }
}

/// In-progress, unsaved user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Empty means "no phone"; sent as `null`.
    pub phone: String,
    pub active: ActiveFlag,
    pub access: AccessSelection,
    pub access_level: Option<AccessLevelId>,
}

impl UserDraft {
    /// Prefill for the edit screen. The list projection carries no password,
    /// screens or access level, so those start empty.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone().unwrap_or_default(),
            active: record.active.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Password => self.password = value,
            UserField::Phone => self.phone = value,
            UserField::Active => match ActiveFlag::from_form_value(&value) {
                Some(flag) => self.active = flag,
                None => tracing::warn!(value = %value, "ignoring unknown active flag"),
            },
            UserField::AccessLevel => {
                self.access_level = (!value.is_empty()).then(|| AccessLevelId::new(value));
            }
        }
    }

    pub fn to_payload(&self) -> CreateUserPayload {
        CreateUserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            active: self.active,
            access: self.access.to_vec(),
            access_level: self.access_level.clone().unwrap_or_else(|| AccessLevelId::new("")),
        }
    }
}

/// Body of the user creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserPayload {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "ativo")]
    pub active: ActiveFlag,
    #[serde(rename = "acessos")]
    pub access: Vec<ModuleId>,
    #[serde(rename = "nivelAcesso")]
    pub access_level: AccessLevelId,
}

/// Form model: the draft plus the catalogs it selects from.
///
/// Catalogs are loaded once when the form opens and kept for its lifetime.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    draft: UserDraft,
    screens: AccessCatalog,
    levels: Vec<AccessLevel>,
}

impl UserForm {
    pub fn new(screens: AccessCatalog, levels: Vec<AccessLevel>) -> Self {
        Self {
            draft: UserDraft::default(),
            screens,
            levels,
        }
    }

    pub fn with_draft(mut self, draft: UserDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn screens(&self) -> &AccessCatalog {
        &self.screens
    }

    pub fn levels(&self) -> &[AccessLevel] {
        &self.levels
    }
}

impl FormModel for UserForm {
    type Field = UserField;
    type Payload = CreateUserPayload;

    fn set_field(&mut self, field: UserField, value: String) {
        self.draft.set(field, value);
    }

    fn validate(&self) -> FieldErrors<UserField> {
        validation::validate_user(&self.draft)
    }

    fn payload(&self) -> CreateUserPayload {
        self.draft.to_payload()
    }
}

impl FormController<UserForm> {
    /// Flip a single screen grant.
    pub fn toggle_access(&mut self, id: ModuleId) -> bool {
        self.model_mut().draft.access.toggle(id)
    }

    /// The "select all" switch over the cached screen catalog.
    pub fn toggle_all_access(&mut self) -> bool {
        let form = self.model_mut();
        let universe = form.screens.ids();
        form.draft.access.toggle_all(&universe)
    }

    /// Current state of the "select all" switch.
    pub fn all_access_selected(&self) -> bool {
        let form = self.model();
        form.draft.access.all_selected(&form.screens.ids())
    }

    pub fn is_access_granted(&self, id: &ModuleId) -> bool {
        self.model().draft.access.contains(id)
    }

    pub fn password_requirements(&self) -> PasswordRequirements {
        PasswordRequirements::evaluate(&self.model().draft.password)
    }
}

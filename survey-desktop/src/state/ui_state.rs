use survey_models::{ParticipantInput, QuestionKind};

/// Fixed dialing table for the phone prefix selector.
pub struct CountryOption {
    pub code: &'static str,
    pub name: &'static str,
    pub dial: &'static str,
}

pub const COUNTRIES: &[CountryOption] = &[
    CountryOption { code: "CO", name: "Colombia", dial: "+57" },
    CountryOption { code: "MX", name: "México", dial: "+52" },
    CountryOption { code: "AR", name: "Argentina", dial: "+54" },
    CountryOption { code: "PE", name: "Perú", dial: "+51" },
    CountryOption { code: "CL", name: "Chile", dial: "+56" },
];

pub fn dial_for(code: &str) -> &'static str {
    COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.dial)
        .unwrap_or("+57")
}

pub fn country_name_for(code: &str) -> Option<&'static str> {
    COUNTRIES.iter().find(|c| c.code == code).map(|c| c.name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Responses,
    Charts,
    Insights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFilter {
    #[default]
    All,
    Needs,
    Proposals,
}

impl ResponseFilter {
    pub fn kind(self) -> Option<QuestionKind> {
        match self {
            ResponseFilter::All => None,
            ResponseFilter::Needs => Some(QuestionKind::Need),
            ResponseFilter::Proposals => Some(QuestionKind::Proposal),
        }
    }
}

/// Everything the survey form binds to.
#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub age_input: String,
    pub country_code: String,
    pub city: String,
    pub neighborhood: String,
    pub phone_digits: String,
    pub q1_description: String,
    /// Selected category slug; empty means nothing picked yet.
    pub q1_category: String,
    pub q2_description: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            age_input: String::new(),
            country_code: "CO".to_string(),
            city: String::new(),
            neighborhood: String::new(),
            phone_digits: String::new(),
            q1_description: String::new(),
            q1_category: String::new(),
            q2_description: String::new(),
        }
    }
}

impl FormState {
    pub fn dial(&self) -> &'static str {
        dial_for(&self.country_code)
    }

    /// Non-digit characters are stripped on every change.
    pub fn set_phone_digits(&mut self, raw: &str) {
        self.phone_digits = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    }

    /// Dialing code plus local digits, or nothing when no digits were typed.
    pub fn phone_to_send(&self) -> Option<String> {
        if self.phone_digits.is_empty() {
            None
        } else {
            Some(format!("{}{}", self.dial(), self.phone_digits))
        }
    }

    /// Name, email, question-1 description and category are required before
    /// any network call happens.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.q1_description.trim().is_empty()
            && !self.q1_category.is_empty()
    }

    /// Assembles the registration payload. Age is coerced to a number or
    /// left absent; the country field carries the selected country's name.
    pub fn participant_input(&self) -> ParticipantInput {
        let optional = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        ParticipantInput {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age: self.age_input.trim().parse().ok(),
            country: country_name_for(&self.country_code).map(str::to_string),
            city: optional(&self.city),
            neighborhood: optional(&self.neighborhood),
            phone: self.phone_to_send(),
        }
    }

    /// Post-submit reset: question fields and phone digits clear, the
    /// profile fields persist for the next submission.
    pub fn clear_after_submit(&mut self) {
        self.q1_description.clear();
        self.q1_category.clear();
        self.q2_description.clear();
        self.phone_digits.clear();
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub form: FormState,
    pub filter: ResponseFilter,
    pub tab: DashboardTab,
}

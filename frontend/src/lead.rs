use std::cell::RefCell;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::api::{ApiError, LeadKind, LeadPayload, RemoteDataClient};
use crate::hooks::Liveness;

pub const MOBILE_DIGITS: usize = 10;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndianState {
    AndhraPradesh,
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Goa,
    Gujarat,
    Haryana,
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    TamilNadu,
    Telangana,
    Tripura,
    UttarPradesh,
    Uttarakhand,
    WestBengal,
    AndamanAndNicobar,
    Chandigarh,
    DadraNagarHaveliDamanDiu,
    Delhi,
    JammuAndKashmir,
    Ladakh,
    Lakshadweep,
    Puducherry,
}

impl IndianState {
    pub const ALL: [IndianState; 36] = [
        IndianState::AndhraPradesh,
        IndianState::ArunachalPradesh,
        IndianState::Assam,
        IndianState::Bihar,
        IndianState::Chhattisgarh,
        IndianState::Goa,
        IndianState::Gujarat,
        IndianState::Haryana,
        IndianState::HimachalPradesh,
        IndianState::Jharkhand,
        IndianState::Karnataka,
        IndianState::Kerala,
        IndianState::MadhyaPradesh,
        IndianState::Maharashtra,
        IndianState::Manipur,
        IndianState::Meghalaya,
        IndianState::Mizoram,
        IndianState::Nagaland,
        IndianState::Odisha,
        IndianState::Punjab,
        IndianState::Rajasthan,
        IndianState::Sikkim,
        IndianState::TamilNadu,
        IndianState::Telangana,
        IndianState::Tripura,
        IndianState::UttarPradesh,
        IndianState::Uttarakhand,
        IndianState::WestBengal,
        IndianState::AndamanAndNicobar,
        IndianState::Chandigarh,
        IndianState::DadraNagarHaveliDamanDiu,
        IndianState::Delhi,
        IndianState::JammuAndKashmir,
        IndianState::Ladakh,
        IndianState::Lakshadweep,
        IndianState::Puducherry,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndianState::AndhraPradesh => "Andhra Pradesh",
            IndianState::ArunachalPradesh => "Arunachal Pradesh",
            IndianState::Assam => "Assam",
            IndianState::Bihar => "Bihar",
            IndianState::Chhattisgarh => "Chhattisgarh",
            IndianState::Goa => "Goa",
            IndianState::Gujarat => "Gujarat",
            IndianState::Haryana => "Haryana",
            IndianState::HimachalPradesh => "Himachal Pradesh",
            IndianState::Jharkhand => "Jharkhand",
            IndianState::Karnataka => "Karnataka",
            IndianState::Kerala => "Kerala",
            IndianState::MadhyaPradesh => "Madhya Pradesh",
            IndianState::Maharashtra => "Maharashtra",
            IndianState::Manipur => "Manipur",
            IndianState::Meghalaya => "Meghalaya",
            IndianState::Mizoram => "Mizoram",
            IndianState::Nagaland => "Nagaland",
            IndianState::Odisha => "Odisha",
            IndianState::Punjab => "Punjab",
            IndianState::Rajasthan => "Rajasthan",
            IndianState::Sikkim => "Sikkim",
            IndianState::TamilNadu => "Tamil Nadu",
            IndianState::Telangana => "Telangana",
            IndianState::Tripura => "Tripura",
            IndianState::UttarPradesh => "Uttar Pradesh",
            IndianState::Uttarakhand => "Uttarakhand",
            IndianState::WestBengal => "West Bengal",
            IndianState::AndamanAndNicobar => "Andaman and Nicobar Islands",
            IndianState::Chandigarh => "Chandigarh",
            IndianState::DadraNagarHaveliDamanDiu => "Dadra and Nagar Haveli and Daman and Diu",
            IndianState::Delhi => "Delhi",
            IndianState::JammuAndKashmir => "Jammu and Kashmir",
            IndianState::Ladakh => "Ladakh",
            IndianState::Lakshadweep => "Lakshadweep",
            IndianState::Puducherry => "Puducherry",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProblemType {
    LowScore,
    LoanRejected,
    CreditCardDefault,
    LoanSettlement,
    ReportErrors,
    IdentityTheft,
    Other,
}

impl ProblemType {
    pub const ALL: [ProblemType; 7] = [
        ProblemType::LowScore,
        ProblemType::LoanRejected,
        ProblemType::CreditCardDefault,
        ProblemType::LoanSettlement,
        ProblemType::ReportErrors,
        ProblemType::IdentityTheft,
        ProblemType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProblemType::LowScore => "Low Score",
            ProblemType::LoanRejected => "Loan Rejected",
            ProblemType::CreditCardDefault => "Credit Card Default",
            ProblemType::LoanSettlement => "Loan Settlement",
            ProblemType::ReportErrors => "Errors in Credit Report",
            ProblemType::IdentityTheft => "Identity Theft",
            ProblemType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.label() == label)
    }
}

/// Text inputs on the lead form. Consent is a checkbox, see `set_authorization`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FullName,
    Email,
    MobileNumber,
    City,
    State,
    ProblemType,
    CreditScore,
    Message,
    Language,
    Occupation,
    Income,
}

impl LeadField {
    pub fn name(&self) -> &'static str {
        match self {
            LeadField::FullName => "fullName",
            LeadField::Email => "email",
            LeadField::MobileNumber => "mobileNumber",
            LeadField::City => "city",
            LeadField::State => "state",
            LeadField::ProblemType => "problemType",
            LeadField::CreditScore => "creditScore",
            LeadField::Message => "message",
            LeadField::Language => "language",
            LeadField::Occupation => "occupation",
            LeadField::Income => "income",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFields {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub city: String,
    pub state: String,
    pub problem_type: String,
    pub credit_score: String,
    pub message: String,
    pub language: String,
    pub occupation: String,
    pub income: String,
    pub authorization: bool,
}

impl LeadFields {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::MobileNumber => &self.mobile_number,
            LeadField::City => &self.city,
            LeadField::State => &self.state,
            LeadField::ProblemType => &self.problem_type,
            LeadField::CreditScore => &self.credit_score,
            LeadField::Message => &self.message,
            LeadField::Language => &self.language,
            LeadField::Occupation => &self.occupation,
            LeadField::Income => &self.income,
        }
    }

    fn slot(&mut self, field: LeadField) -> &mut String {
        match field {
            LeadField::FullName => &mut self.full_name,
            LeadField::Email => &mut self.email,
            LeadField::MobileNumber => &mut self.mobile_number,
            LeadField::City => &mut self.city,
            LeadField::State => &mut self.state,
            LeadField::ProblemType => &mut self.problem_type,
            LeadField::CreditScore => &mut self.credit_score,
            LeadField::Message => &mut self.message,
            LeadField::Language => &mut self.language,
            LeadField::Occupation => &mut self.occupation,
            LeadField::Income => &mut self.income,
        }
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    FullName,
    #[error("Please enter a valid 10-digit mobile number.")]
    MobileNumber,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("Please enter your city.")]
    City,
    #[error("Please select your state.")]
    State,
    #[error("Please select the problem you are facing.")]
    ProblemType,
    #[error("Please authorize us to contact you.")]
    Authorization,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Field state and submission lifecycle of one lead form.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm {
    fields: LeadFields,
    status: SubmitStatus,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            fields: LeadFields::default(),
            status: SubmitStatus::Idle,
        }
    }
}

fn digits(raw: &str) -> impl Iterator<Item = char> + '_ {
    raw.chars().filter(|c| c.is_ascii_digit())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl LeadForm {
    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Stores user input. Mobile number and income keep digits only, and the
    /// mobile number stops growing at ten digits.
    pub fn set_field(&mut self, field: LeadField, raw: &str) {
        let value = match field {
            LeadField::MobileNumber => digits(raw).take(MOBILE_DIGITS).collect(),
            LeadField::Income => digits(raw).collect(),
            _ => raw.to_string(),
        };
        *self.fields.slot(field) = value;
    }

    pub fn set_authorization(&mut self, authorized: bool) {
        self.fields.authorization = authorized;
    }

    /// First failing rule, checked in display order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let f = &self.fields;
        if f.full_name.trim().chars().count() < 2 {
            return Err(ValidationError::FullName);
        }
        if f.mobile_number.len() != MOBILE_DIGITS
            || !f.mobile_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ValidationError::MobileNumber);
        }
        if !EMAIL_SHAPE.is_match(f.email.trim()) {
            return Err(ValidationError::Email);
        }
        if f.city.trim().is_empty() {
            return Err(ValidationError::City);
        }
        if IndianState::from_label(f.state.trim()).is_none() {
            return Err(ValidationError::State);
        }
        if ProblemType::from_label(f.problem_type.trim()).is_none() {
            return Err(ValidationError::ProblemType);
        }
        if !f.authorization {
            return Err(ValidationError::Authorization);
        }
        Ok(())
    }

    pub fn payload(&self) -> LeadPayload {
        let f = &self.fields;
        LeadPayload {
            full_name: f.full_name.trim().to_string(),
            email: f.email.trim().to_string(),
            mobile_number: digits(&f.mobile_number).collect(),
            city: f.city.trim().to_string(),
            state: f.state.trim().to_string(),
            problem_type: f.problem_type.trim().to_string(),
            credit_score: optional(&f.credit_score),
            message: optional(&f.message),
            language: optional(&f.language),
            occupation: optional(&f.occupation),
            income: optional(&f.income),
        }
    }

    /// Moves to `Submitting` and hands back the payload to send, or returns
    /// `None` when nothing should go out: a request is already in flight, the
    /// form already succeeded, or validation failed (status becomes `Failed`).
    pub fn begin_submit(&mut self) -> Option<LeadPayload> {
        match self.status {
            SubmitStatus::Submitting | SubmitStatus::Succeeded => return None,
            SubmitStatus::Idle | SubmitStatus::Failed(_) => {}
        }
        if let Err(e) = self.validate() {
            debug!("Lead form failed validation: {:?}", e);
            self.status = SubmitStatus::Failed(e.to_string());
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.payload())
    }

    /// Applies the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = LeadFields::default();
                self.status = SubmitStatus::Succeeded;
            }
            Err(e) => self.status = SubmitStatus::Failed(e.user_message()),
        }
    }

    /// Clears everything and starts over, e.g. after a success.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// No request was sent.
    Skipped,
    /// A request was sent and its result applied.
    Completed,
    /// A request was sent but its owner went away before it returned.
    Discarded,
}

/// Runs one submit attempt against `client`, calling `on_change` after each
/// status transition. The form is only borrowed around the await, never
/// across it, so other handlers stay usable.
pub async fn submit_lead<C, F>(
    form: &RefCell<LeadForm>,
    client: &C,
    live: &Liveness,
    on_change: F,
) -> Submission
where
    C: RemoteDataClient,
    F: Fn(),
{
    let started = form.borrow_mut().begin_submit();
    on_change();
    let Some(payload) = started else {
        return Submission::Skipped;
    };
    info!("Submitting credit repair lead");
    let outcome = client.create_lead(LeadKind::CreditRepair, &payload).await;
    if !live.is_alive() {
        debug!("Lead form unmounted before the response arrived, dropping it");
        return Submission::Discarded;
    }
    form.borrow_mut().finish_submit(outcome);
    on_change();
    Submission::Completed
}

//! Messages shown next to a field that failed validation

pub const FULL_NAME_REQUIRED: &str = "Full Name is required";

pub const EMAIL_REQUIRED: &str = "Email is required";

pub const EMAIL_INVALID: &str = "Email is invalid";

pub const PHONE_NUMBER_REQUIRED: &str = "Phone Number is required";

pub const POSITION_REQUIRED: &str = "Applying for Position is required";

pub const RELEVANT_EXPERIENCE_REQUIRED: &str = "Relevant Experience is required";

pub const RELEVANT_EXPERIENCE_NOT_A_NUMBER: &str = "Relevant Experience must be a number";

pub const PORTFOLIO_URL_REQUIRED: &str = "Portfolio URL is required";

pub const PORTFOLIO_URL_INVALID: &str = "Portfolio URL is invalid";

pub const MANAGEMENT_EXPERIENCE_REQUIRED: &str = "Management Experience is required";

pub const INTERVIEW_TIME_REQUIRED: &str = "Preferred Interview Time is required";

pub const SKILLS_REQUIRED: &str = "At least one skill must be selected";

mod address_form;
mod home_details_form;
mod plan_card;
mod status;

pub use self::{address_form::*, home_details_form::*, plan_card::*, status::*};

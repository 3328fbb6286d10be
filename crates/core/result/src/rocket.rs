use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self.error_type {
            ErrorType::LabelMe => Status::InternalServerError,

            ErrorType::UnknownUser => Status::NotFound,

            ErrorType::UnknownPost => Status::NotFound,
            ErrorType::MissingPhotos => Status::UnprocessableEntity,
            ErrorType::TooManyPhotos { .. } => Status::BadRequest,

            ErrorType::UnknownEvent => Status::NotFound,
            ErrorType::EndsBeforeStart => Status::BadRequest,
            ErrorType::EventHasPassed => Status::BadRequest,
            ErrorType::NotEventHost => Status::Forbidden,

            ErrorType::UnknownRsvp => Status::NotFound,
            ErrorType::AlreadyResponded => Status::Conflict,
            ErrorType::CannotRsvpToOwnEvent => Status::BadRequest,
            ErrorType::CannotCancelHostRsvp => Status::BadRequest,
            ErrorType::NotAttending => Status::NotFound,
            ErrorType::TooManyAttendees { .. } => Status::BadRequest,

            ErrorType::PartnerUnavailable => Status::BadGateway,

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::InvalidOperation => Status::BadRequest,
            ErrorType::InvalidSession => Status::Unauthorized,
            ErrorType::NotAuthenticated => Status::Unauthorized,
            ErrorType::NotFound => Status::NotFound,
            ErrorType::NoEffect => Status::Ok,
            ErrorType::FailedValidation { .. } => Status::BadRequest,
        };

        // Serialize the error data structure into JSON.
        let string = serde_json::to_string(&self).unwrap();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}

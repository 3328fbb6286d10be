use std::collections::HashMap;

use futures::lock::Mutex;

use litterless_result::{create_error, Result};

/// RSVP workflow state for one user
///
/// The form is opened for a single event at a time; submission either
/// reaches the thank-you acknowledgement or falls back to idle. There
/// is no path from a submission back to the open form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RsvpFlow {
    #[default]
    Idle,
    FormOpen {
        event: String,
    },
    Submitting {
        event: String,
    },
    ThankYou {
        event: String,
    },
}

impl RsvpFlow {
    /// Open the form for an event
    pub fn open(&mut self, event: String) -> Result<()> {
        match self {
            RsvpFlow::Idle => {
                *self = RsvpFlow::FormOpen { event };
                Ok(())
            }
            _ => Err(create_error!(InvalidOperation)),
        }
    }

    /// Begin submitting the open form, returning the selected event
    pub fn submit(&mut self) -> Result<String> {
        match self {
            RsvpFlow::FormOpen { event } => {
                let event = event.clone();
                *self = RsvpFlow::Submitting {
                    event: event.clone(),
                };
                Ok(event)
            }
            _ => Err(create_error!(InvalidOperation)),
        }
    }

    /// Submission persisted, show the thank-you message
    pub fn complete(&mut self) -> Result<()> {
        match self {
            RsvpFlow::Submitting { event } => {
                *self = RsvpFlow::ThankYou {
                    event: event.clone(),
                };
                Ok(())
            }
            _ => Err(create_error!(InvalidOperation)),
        }
    }

    /// Submission failed, discard the attempt
    pub fn fail(&mut self) {
        if matches!(self, RsvpFlow::Submitting { .. }) {
            *self = RsvpFlow::Idle;
        }
    }

    /// Acknowledge the thank-you message
    pub fn acknowledge(&mut self) -> Result<()> {
        match self {
            RsvpFlow::ThankYou { .. } => {
                *self = RsvpFlow::Idle;
                Ok(())
            }
            _ => Err(create_error!(InvalidOperation)),
        }
    }

    /// Discard the open form
    pub fn cancel(&mut self) -> Result<()> {
        match self {
            RsvpFlow::FormOpen { .. } => {
                *self = RsvpFlow::Idle;
                Ok(())
            }
            _ => Err(create_error!(InvalidOperation)),
        }
    }

    /// Event currently selected by this flow
    pub fn event(&self) -> Option<&str> {
        match self {
            RsvpFlow::Idle => None,
            RsvpFlow::FormOpen { event }
            | RsvpFlow::Submitting { event }
            | RsvpFlow::ThankYou { event } => Some(event),
        }
    }
}

/// Per-user RSVP workflow states
#[derive(Default)]
pub struct FlowStore {
    flows: Mutex<HashMap<String, RsvpFlow>>,
}

impl FlowStore {
    /// Run a transition against a user's flow
    pub async fn update<F, T>(&self, user: &str, transition: F) -> Result<T>
    where
        F: FnOnce(&mut RsvpFlow) -> Result<T>,
    {
        let mut flows = self.flows.lock().await;
        let flow = flows.entry(user.to_string()).or_default();
        transition(flow)
    }
}

#[cfg(test)]
mod tests {
    use super::RsvpFlow;

    #[test]
    fn full_cycle() {
        let mut flow = RsvpFlow::default();

        flow.open("E1".to_string()).unwrap();
        assert_eq!(flow.event(), Some("E1"));

        assert_eq!(flow.submit().unwrap(), "E1");
        flow.complete().unwrap();
        flow.acknowledge().unwrap();
        assert_eq!(flow, RsvpFlow::Idle);
    }

    #[test]
    fn cancel_discards_the_form() {
        let mut flow = RsvpFlow::default();

        flow.open("E1".to_string()).unwrap();
        flow.cancel().unwrap();
        assert_eq!(flow, RsvpFlow::Idle);

        // The form can be reopened afterwards.
        flow.open("E2".to_string()).unwrap();
        assert_eq!(flow.event(), Some("E2"));
    }

    #[test]
    fn submission_never_returns_to_the_form() {
        let mut flow = RsvpFlow::default();

        flow.open("E1".to_string()).unwrap();
        flow.submit().unwrap();

        // While submitting, the form cannot be reopened or resubmitted.
        assert!(flow.open("E1".to_string()).is_err());
        assert!(flow.submit().is_err());
        assert!(flow.cancel().is_err());
        assert_eq!(flow, RsvpFlow::Submitting {
            event: "E1".to_string()
        });

        // Only completion moves forward; acknowledging resets.
        flow.complete().unwrap();
        assert!(flow.submit().is_err());
        flow.acknowledge().unwrap();
        assert_eq!(flow, RsvpFlow::Idle);
    }

    #[test]
    fn failed_submission_falls_back_to_idle() {
        let mut flow = RsvpFlow::default();

        flow.open("E1".to_string()).unwrap();
        flow.submit().unwrap();
        flow.fail();
        assert_eq!(flow, RsvpFlow::Idle);

        // Failing outside a submission changes nothing.
        flow.open("E2".to_string()).unwrap();
        flow.fail();
        assert_eq!(flow.event(), Some("E2"));
    }

    #[test]
    fn acknowledge_requires_thank_you() {
        let mut flow = RsvpFlow::default();
        assert!(flow.acknowledge().is_err());

        flow.open("E1".to_string()).unwrap();
        assert!(flow.acknowledge().is_err());
    }
}

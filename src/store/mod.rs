use serde_json::{Map, Value};

use crate::models::{Event, Guest};
use crate::utils::AppError;

/// A JSON request body that has already been parsed into an object.
pub type Body = Map<String, Value>;

const GUEST_PATCH_KEYS: [&str; 4] = ["firstName", "lastName", "deadline", "attending"];

/// In-memory owner of all events and their embedded guest lists.
///
/// One instance per process, shared behind a lock; every operation is
/// all-or-nothing against the vectors below. Event IDs and guest IDs come
/// from two independent counters and are never reused, even after deletion.
/// Lookups are linear scans, which is fine at this scale.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    next_event_id: u64,
    next_guest_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_event_id: 1,
            next_guest_id: 1,
        }
    }

    /// Creates an event from a request body holding exactly `eventName` and
    /// `eventLocation`, both non-empty strings.
    pub fn create_event(&mut self, body: &Body) -> Result<Event, AppError> {
        let (Some(event_name), Some(event_location)) = (
            non_empty_str(body, "eventName"),
            non_empty_str(body, "eventLocation"),
        ) else {
            return Err(AppError::Validation(
                "Request body missing an eventName or eventLocation property".to_string(),
            ));
        };

        if body.keys().any(|k| k != "eventName" && k != "eventLocation") {
            return Err(AppError::Validation(
                "Request body contains more than eventName and eventLocation".to_string(),
            ));
        }

        let event = Event {
            event_id: self.alloc_event_id(),
            event_name: event_name.to_string(),
            event_location: event_location.to_string(),
            guest_list: Vec::new(),
        };

        self.events.push(event.clone());
        Ok(event)
    }

    /// All events in creation order, each with its current guest list.
    pub fn list_events(&self) -> Vec<Event> {
        self.events.clone()
    }

    pub fn list_guests(&self, event_id: &str) -> Result<Vec<Guest>, AppError> {
        let event = self.find_event(event_id)?;
        Ok(event.guest_list.clone())
    }

    /// Removes the event and its embedded guest list as one unit.
    pub fn delete_event(&mut self, event_id: &str) -> Result<Event, AppError> {
        let position = self
            .events
            .iter()
            .position(|event| event.event_id == event_id)
            .ok_or_else(|| event_not_found(event_id))?;

        Ok(self.events.remove(position))
    }

    /// Creates a guest from a request body holding `firstName` and `lastName`
    /// (required, non-empty), an optional `deadline`, and the `eventId` of the
    /// event to attach to.
    ///
    /// When `eventId` matches no live event the guest is still constructed and
    /// returned, but attached to no guest list and unreachable through any
    /// later lookup. Deliberately not a 404.
    pub fn create_guest(&mut self, body: &Body) -> Result<Guest, AppError> {
        let (Some(first_name), Some(last_name)) = (
            non_empty_str(body, "firstName"),
            non_empty_str(body, "lastName"),
        ) else {
            return Err(AppError::Validation(
                "Request body missing a firstName or lastName property".to_string(),
            ));
        };

        if body
            .keys()
            .any(|k| !matches!(k.as_str(), "firstName" | "lastName" | "deadline" | "eventId"))
        {
            return Err(AppError::Validation(
                "Request body contains more than firstName, lastName and deadline properties"
                    .to_string(),
            ));
        }

        let guest = Guest {
            id: self.alloc_guest_id(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            deadline: non_empty_str(body, "deadline").map(str::to_string),
            attending: false,
            event_id: body
                .get("eventId")
                .and_then(Value::as_str)
                .map(str::to_string),
        };

        if let Some(event_id) = guest.event_id.as_deref() {
            if let Some(event) = self.events.iter_mut().find(|e| e.event_id == event_id) {
                event.guest_list.push(guest.clone());
            }
        }

        Ok(guest)
    }

    /// Applies a patch to one guest inside one event.
    ///
    /// `firstName`, `lastName` and `deadline` only take effect when supplied
    /// as non-empty strings, so an update can overwrite a deadline but never
    /// clear it. `attending` takes effect whenever the key is present,
    /// including an explicit `false`.
    pub fn update_guest(
        &mut self,
        event_id: &str,
        guest_id: &str,
        patch: &Body,
    ) -> Result<Guest, AppError> {
        let extra_keys: Vec<&str> = patch
            .keys()
            .map(String::as_str)
            .filter(|k| !GUEST_PATCH_KEYS.contains(k))
            .collect();

        if !extra_keys.is_empty() {
            return Err(AppError::Validation(format!(
                "Request body contains more than allowed properties ({}). \
                 The request also contains these extra keys that are not allowed: {}",
                GUEST_PATCH_KEYS.join(", "),
                extra_keys.join(", ")
            )));
        }

        let guest = self.find_guest_mut(event_id, guest_id)?;

        if let Some(first_name) = non_empty_str(patch, "firstName") {
            guest.first_name = first_name.to_string();
        }
        if let Some(last_name) = non_empty_str(patch, "lastName") {
            guest.last_name = last_name.to_string();
        }
        if let Some(deadline) = non_empty_str(patch, "deadline") {
            guest.deadline = Some(deadline.to_string());
        }
        if let Some(attending) = patch.get("attending").and_then(Value::as_bool) {
            guest.attending = attending;
        }

        Ok(guest.clone())
    }

    pub fn delete_guest(&mut self, event_id: &str, guest_id: &str) -> Result<Guest, AppError> {
        let event = self.find_event_mut(event_id)?;

        let position = event
            .guest_list
            .iter()
            .position(|guest| guest.id == guest_id)
            .ok_or_else(|| guest_not_found(guest_id))?;

        Ok(event.guest_list.remove(position))
    }

    fn find_event(&self, event_id: &str) -> Result<&Event, AppError> {
        self.events
            .iter()
            .find(|event| event.event_id == event_id)
            .ok_or_else(|| event_not_found(event_id))
    }

    fn find_event_mut(&mut self, event_id: &str) -> Result<&mut Event, AppError> {
        self.events
            .iter_mut()
            .find(|event| event.event_id == event_id)
            .ok_or_else(|| event_not_found(event_id))
    }

    fn find_guest_mut(&mut self, event_id: &str, guest_id: &str) -> Result<&mut Guest, AppError> {
        self.find_event_mut(event_id)?
            .guest_list
            .iter_mut()
            .find(|guest| guest.id == guest_id)
            .ok_or_else(|| guest_not_found(guest_id))
    }

    fn alloc_event_id(&mut self) -> String {
        let id = self.next_event_id;
        self.next_event_id += 1;
        id.to_string()
    }

    fn alloc_guest_id(&mut self) -> String {
        let id = self.next_guest_id;
        self.next_guest_id += 1;
        id.to_string()
    }
}

/// `Some(value)` only when `key` is present as a non-empty string.
fn non_empty_str<'a>(body: &'a Body, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn event_not_found(event_id: &str) -> AppError {
    AppError::NotFound(format!("Event {event_id} not found"))
}

fn guest_not_found(guest_id: &str) -> AppError {
    AppError::NotFound(format!("Guest {guest_id} not found"))
}

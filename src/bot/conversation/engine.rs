//! The alert-submission state machine.
//!
//! Steps 0 through 6 walk a user through subject, description, date, and
//! time, then a review draft and a final y/n confirmation. All transition
//! logic lives here as plain values so handlers only do the sending; no
//! transport types leak in.

use super::store::ConversationState;

const SUBJECT_PROMPT: &str = "First part: what should the subject of your alert be?\n\n\
    Ex. 'Data Structures Final Exam'";

const DESCRIPTION_PROMPT: &str = "Second part: write a short description for the alert \
    (1000 character limit).\n\n\
    Note: enter a single period '.' to skip the description";

const DATE_PROMPT: &str = "Third part: what day do you want the alert to show on?\n\n\
    Note: please enter in the format mm-dd-yyyy. Ex. 02-10-2021";

const TIME_PROMPT: &str = "Final part: what time do you want the alert to show?\n\n\
    Note: please enter in the format HH:MM and in 24-hour format. \
    Ex. 4:00 pm would be 16:00";

const SUBMITTED_ACK: &str = "Alert has been submitted for approval";

/// Completed submission, ready to append to the pending queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDraft {
    pub author: String,
    pub subject: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

/// Result of feeding one inbound message into a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Send the next prompt and wait for the following answer.
    Next(String),
    /// All answers collected; send the draft summary and wait for y/n.
    Review(String),
    /// Confirmed. Caller appends the draft to the queue, sends the
    /// acknowledgement, and destroys the state.
    Submitted { draft: AlertDraft, ack: String },
    /// Declined confirmation. Caller destroys the state silently.
    Abandoned,
}

/// Starts a conversation: emits the welcome and the subject prompt as one
/// atomic message and advances step 0 -> 1. This is the only step that
/// sends two prompts without waiting for input in between.
pub fn begin(state: &mut ConversationState) -> String {
    state.step = 1;
    format!(
        "Hey {}! I see you're trying to create an alert. \
         I'll just be asking you to provide some info to get it set up.\n\n\
         {}\n\n{}",
        state.display_name,
        "-".repeat(100),
        SUBJECT_PROMPT
    )
}

/// Consumes one answer and advances the machine.
///
/// Every input is stored verbatim, including the "." description-skip
/// sentinel and unvalidated date/time text.
pub fn advance(state: &mut ConversationState, input: &str) -> Advance {
    state.answers.push(input.to_string());
    state.step += 1;

    match state.step {
        2 => Advance::Next(DESCRIPTION_PROMPT.to_string()),
        3 => Advance::Next(DATE_PROMPT.to_string()),
        4 => Advance::Next(TIME_PROMPT.to_string()),
        5 => Advance::Review(review_text(state)),
        _ => {
            if input.trim().eq_ignore_ascii_case("y") {
                Advance::Submitted {
                    draft: draft_from(state),
                    ack: SUBMITTED_ACK.to_string(),
                }
            } else {
                Advance::Abandoned
            }
        }
    }
}

fn review_text(state: &ConversationState) -> String {
    format!(
        "Alright, here's what I have so far:\n\n\
         AUTHOR: {}\n\
         SUBJECT: {}\n\
         DESCRIPTION: {}\n\
         DATE & TIME: {}, {}\n\n\
         If this looks good enter 'y' to submit it",
        state.display_name,
        state.answers[0],
        state.answers[1],
        state.answers[2],
        state.answers[3],
    )
}

fn draft_from(state: &ConversationState) -> AlertDraft {
    AlertDraft {
        author: state.display_name.clone(),
        subject: state.answers[0].clone(),
        description: state.answers[1].clone(),
        date: state.answers[2].clone(),
        time: state.answers[3].clone(),
    }
}

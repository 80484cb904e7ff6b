use chrono::NaiveDateTime;
use crate::enums::session_status::SessionStatus;
use crate::helpers::date_helper::DateHelper;
use crate::structs::session::Session;

pub struct StartingSoon;

impl StartingSoon {
    /// Start time of a scheduled session, if its date and time range parse.
    pub fn start_of(session: &Session) -> Option<NaiveDateTime> {
        if session.status != SessionStatus::Scheduled {
            return None;
        }
        DateHelper::start_of_range(&session.date, &session.time)
    }

    /// The scheduled session with the earliest start strictly after `now`.
    /// Ties keep the earlier entry.
    pub fn next_session(sessions: &[Session], now: NaiveDateTime) -> Option<&Session> {
        sessions
            .iter()
            .filter_map(|session| Self::start_of(session).map(|start| (start, session)))
            .filter(|(start, _)| *start > now)
            .fold(None, |nearest: Option<(NaiveDateTime, &Session)>, (start, session)| match nearest {
                Some((best, _)) if best <= start => nearest,
                _ => Some((start, session)),
            })
            .map(|(_, session)| session)
    }

    /// Nearest, not "within N minutes": exactly one session can be flagged.
    pub fn is_starting_soon(session: &Session, sessions: &[Session], now: NaiveDateTime) -> bool {
        Self::next_session(sessions, now).is_some_and(|next| next.session_code == session.session_code)
    }
}

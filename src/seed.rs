//! Startup activity set. Hardcoded; the directory is rebuilt from this on
//! every process start.

use indexmap::IndexMap;

use crate::state::Activity;

fn activity(description: &str, schedule: &str, max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_owned(),
        schedule: schedule.to_owned(),
        max_participants,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

/// Initial activities keyed by name. Listing order follows this order.
#[must_use]
pub fn default_activities() -> IndexMap<String, Activity> {
    let entries = [
        (
            "Chess Club",
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball",
            activity(
                "Team basketball practice and games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Soccer",
            activity(
                "Competitive soccer team for all skill levels",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["jordan@mergington.edu", "casey@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            activity(
                "Explore painting, drawing, and mixed media",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &["lily@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            activity(
                "Act, direct, and produce school plays and performances",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
                &["mia@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            activity(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
                &["liam@mergington.edu", "ella@mergington.edu"],
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_owned(), activity))
        .collect()
}

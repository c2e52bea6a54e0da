//! Fixed demo dataset loaded at startup.

use chrono::TimeDelta;
use quriousity_core::types::Timestamp;

use crate::models::assessment::{Assessment, STATUS_AVAILABLE};
use crate::models::community::{Discussion, LeaderboardEntry};
use crate::models::course::Course;
use crate::models::progress::CourseProgress;
use crate::models::user::User;

/// All collections the catalog is built from.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<CourseProgress>,
    pub assessments: Vec<Assessment>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub discussions: Vec<Discussion>,
}

impl SeedData {
    /// The demo dataset, with enrollment timestamps relative to `now`.
    pub fn demo(now: Timestamp) -> Self {
        Self {
            users: users(),
            courses: courses(),
            enrollments: enrollments(now),
            assessments: assessments(),
            leaderboard: leaderboard(),
            discussions: discussions(),
        }
    }
}

fn users() -> Vec<User> {
    vec![
        User::new("user1", "Sripathi", "sripathi@example.com", "Data Engineer"),
        User::new("user2", "Anjali", "anjali@example.com", "Data Scientist"),
    ]
}

fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "course1".into(),
            title: "Generative AI for Developers".into(),
            description: "Master strategies and techniques to code with Generative AI. Learn \
                          prompt engineering and how to integrate AI in your applications."
                .into(),
            course_type: "Course".into(),
            level: "Intermediate".into(),
            duration: "4h 40m".into(),
            instructor: "Dr. Johnson".into(),
            instructor_id: "instructor1".into(),
            enrolled_count: 17770,
            rating: Some(4.8),
            thumbnail_url: None,
        },
        Course {
            id: "course2".into(),
            title: "Data Science Professional Certificate".into(),
            description: "Launch your career in data science with job-ready skills and \
                          hands-on experience."
                .into(),
            course_type: "Pathway".into(),
            level: "Beginner".into(),
            duration: "12h 30m".into(),
            instructor: "Prof. Sharma".into(),
            instructor_id: "instructor2".into(),
            enrolled_count: 24310,
            rating: Some(4.7),
            thumbnail_url: None,
        },
        Course {
            id: "course3".into(),
            title: "Understanding Machine Learning Algorithms".into(),
            description: "Dive deep into the theory and implementation of machine learning \
                          algorithms from classification to clustering."
                .into(),
            course_type: "Course".into(),
            level: "Intermediate".into(),
            duration: "5h 15m".into(),
            instructor: "Dr. Johnson".into(),
            instructor_id: "instructor1".into(),
            enrolled_count: 8245,
            rating: Some(4.6),
            thumbnail_url: None,
        },
    ]
}

fn enrollments(now: Timestamp) -> Vec<CourseProgress> {
    vec![
        CourseProgress::with_progress(
            "course1",
            "user1",
            &["module1", "module2"],
            20.0,
            now - TimeDelta::hours(2),
        ),
        CourseProgress::with_progress(
            "course3",
            "user1",
            &["module1"],
            10.0,
            now - TimeDelta::days(1),
        ),
    ]
}

fn assessment(id: &str, title: &str, kind: &str, questions: u32, estimate: &str) -> Assessment {
    Assessment {
        id: id.to_string(),
        title: title.to_string(),
        assessment_type: kind.to_string(),
        questions,
        time_estimate: estimate.to_string(),
        status: STATUS_AVAILABLE.to_string(),
        requirement: None,
    }
}

fn assessments() -> Vec<Assessment> {
    vec![
        assessment("assessment1", "Python Fundamentals Quiz", "Quiz", 15, "20 min"),
        assessment(
            "assessment2",
            "Machine Learning Algorithms Assessment",
            "Test",
            25,
            "45 min",
        ),
        assessment(
            "assessment3",
            "Generative AI Assessment - Basic Level",
            "Certification",
            15,
            "30 min",
        ),
    ]
}

fn entry(
    user_id: &str,
    name: &str,
    role: &str,
    points: u32,
    streak: u32,
    badge: Option<&str>,
    change: &str,
) -> LeaderboardEntry {
    LeaderboardEntry {
        user_id: user_id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        points,
        streak,
        badge: badge.map(str::to_string),
        change: change.to_string(),
        is_online: false,
    }
}

/// Snapshot order is preserved as-is; it is not sorted by points.
fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        entry("user3", "Alex K.", "AI Researcher", 1250, 45, Some("Expert"), "+2"),
        entry("user4", "Maria G.", "Data Scientist", 980, 30, Some("Mentor"), "0"),
        entry("user5", "Wei L.", "ML Engineer", 940, 28, Some("Contributor"), "-1"),
        entry("user1", "Sripathi", "Data Engineer", 440, 8, None, "+1"),
        LeaderboardEntry {
            is_online: true,
            ..entry("user2", "Anjali", "Data Scientist", 680, 15, None, "+3")
        },
    ]
}

fn discussions() -> Vec<Discussion> {
    vec![
        Discussion {
            id: "discussion1".into(),
            title: "Tips for optimizing deep learning models?".into(),
            author: "Maria G.".into(),
            author_id: "user4".into(),
            category: "Deep Learning".into(),
            replies: 12,
            views: 234,
            time: "2 hours ago".into(),
            solved: true,
        },
        Discussion {
            id: "discussion2".into(),
            title: "How to handle imbalanced datasets in classification problems?".into(),
            author: "Alex K.".into(),
            author_id: "user3".into(),
            category: "Machine Learning".into(),
            replies: 8,
            views: 156,
            time: "Yesterday".into(),
            solved: false,
        },
    ]
}

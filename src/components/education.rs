//! Education section - degree timeline, certifications and ongoing courses.

use dioxus::prelude::*;
use portfolio_core::catalog::{
    filter_courses, learning_stats, Certification, Course, CourseFilter, Education,
    CERTIFICATIONS, EDUCATION,
};
use portfolio_ui::{ProgressBar, SectionHeading, Tag, TagTone};

use super::icons::{Icon, IconKind};
use super::reveal::Reveal;

/// Status tag for a course card.
pub fn course_status(course: &Course) -> (&'static str, TagTone) {
    if course.completed {
        ("Completed", TagTone::Success)
    } else {
        ("In Progress", TagTone::Warning)
    }
}

#[component]
pub fn EducationSection() -> Element {
    let mut course_filter = use_signal(CourseFilter::default);
    let mut menu_open = use_signal(|| false);

    let current = course_filter();
    let courses = filter_courses(current);
    let stats = learning_stats();

    rsx! {
        section { id: "education", class: "section",
            div { class: "container",
                SectionHeading {
                    title: "Education &".to_string(),
                    highlight: "Learning".to_string(),
                    subtitle: "Formal studies, certifications and what I'm learning now".to_string(),
                }

                div { class: "education-grid",
                    div {
                        h3 { class: "subsection-title",
                            Icon { kind: IconKind::GraduationCap }
                            "Education"
                        }
                        div { class: "timeline",
                            for (i, entry) in EDUCATION.iter().enumerate() {
                                Reveal { key: "{entry.degree}", delay_ms: i as u32 * 100,
                                    EducationCard { entry: *entry }
                                }
                            }
                        }

                        h3 { class: "subsection-title",
                            Icon { kind: IconKind::Award }
                            "Certifications"
                        }
                        for (i, cert) in CERTIFICATIONS.iter().enumerate() {
                            Reveal { key: "{cert.title}", delay_ms: i as u32 * 100,
                                CertificationCard { cert: *cert }
                            }
                        }
                    }

                    div {
                        div { class: "card-row course-header",
                            h3 { class: "subsection-title",
                                Icon { kind: IconKind::BookOpen }
                                "Courses"
                            }
                            div { class: "dropdown",
                                button {
                                    class: "btn-ghost",
                                    r#type: "button",
                                    "aria-haspopup": "listbox",
                                    "aria-expanded": "{menu_open}",
                                    onclick: move |_| menu_open.toggle(),
                                    "{current.label()}"
                                    Icon { kind: IconKind::ChevronDown, size: 16 }
                                }
                                if menu_open() {
                                    ul { class: "dropdown-menu", role: "listbox",
                                        for option in CourseFilter::all().iter().copied() {
                                            li {
                                                key: "{option.menu_label()}",
                                                role: "option",
                                                "aria-selected": if option == current { "true" } else { "false" },
                                                onclick: move |_| {
                                                    tracing::debug!(filter = option.label(), "Course filter");
                                                    course_filter.set(option);
                                                    menu_open.set(false);
                                                },
                                                "{option.menu_label()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        for course in courses.iter() {
                            CourseCard { key: "{course.title}", course: **course }
                        }

                        Reveal { class: "learning-stats".to_string(),
                            div {
                                div { class: "stat-value", "{stats.completed_hours}+" }
                                div { class: "stat-label", "Hours Learned" }
                            }
                            div {
                                div { class: "stat-value", "{stats.certificates}" }
                                div { class: "stat-label", "Certificates" }
                            }
                            div {
                                div { class: "stat-value", "{stats.courses}" }
                                div { class: "stat-label", "Courses" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EducationCard(entry: Education) -> Element {
    rsx! {
        article { class: "edu-card",
            div { class: "card-row",
                h4 { "{entry.degree}" }
                Tag { label: entry.years.to_string(), tone: TagTone::Muted }
            }
            p { class: "edu-institution", "{entry.institution}" }
            p { "{entry.description}" }
            ul {
                for item in entry.achievements.iter() {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}

#[component]
fn CertificationCard(cert: Certification) -> Element {
    rsx! {
        article { class: "cert-card",
            div { class: "card-row",
                div {
                    h4 { "{cert.title}" }
                    p { "{cert.issuer} · {cert.year}" }
                }
                a {
                    href: cert.credential_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aria-label": "View credential for {cert.title}",
                    Icon { kind: IconKind::ExternalLink, size: 18 }
                }
            }
            div { class: "badge-row",
                for skill in cert.skills.iter() {
                    Tag { key: "{skill}", label: skill.to_string() }
                }
            }
        }
    }
}

#[component]
fn CourseCard(course: Course) -> Element {
    let (status, tone) = course_status(&course);

    rsx! {
        article { class: "course-card",
            div { class: "card-row",
                h4 { "{course.title}" }
                Tag { label: status.to_string(), tone }
            }
            p { "{course.platform} · {course.year} · {course.hours} hours" }
            if let Some(progress) = course.progress {
                ProgressBar { percent: progress, label: "Progress".to_string() }
            }
            if course.certificate {
                span { class: "course-cert",
                    Icon { kind: IconKind::Award, size: 16 }
                    "Certificate earned"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::catalog::COURSES;

    #[test]
    fn unfinished_courses_are_in_progress() {
        for course in COURSES {
            let (label, tone) = course_status(course);
            if course.completed {
                assert_eq!((label, tone), ("Completed", TagTone::Success));
            } else {
                assert_eq!((label, tone), ("In Progress", TagTone::Warning));
                assert!(course.progress.is_some());
            }
        }
    }
}

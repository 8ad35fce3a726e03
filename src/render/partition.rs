//! Splitting the collection into the featured and standard layouts.

use crate::model::Project;

/// The two display groups, each in listing order.
#[derive(Debug, Default, PartialEq)]
pub struct Partition<'a> {
    pub featured: Vec<&'a Project>,
    pub standard: Vec<&'a Project>,
}

/// Puts every project in exactly one group, by its `featured` flag.
pub fn partition(projects: &[Project]) -> Partition<'_> {
    let (featured, standard) = projects.iter().partition(|project| project.featured);
    Partition { featured, standard }
}

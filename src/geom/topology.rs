//! Edge and loop values handed to boundary-representation construction.
//!
//! An [`Edge`] joins two points. Without a basis it is a straight segment; with
//! a [`Circle3`] basis it is the circular arc running from `start` to `end`
//! counter-clockwise about the circle's normal. A [`Loop`] is an ordered chain
//! of edges. Loops are plain values: they are built by one conversion and moved
//! to the caller, nothing else holds on to them.

use serde::{Deserialize, Serialize};

use super::core::Point3;
use super::curve::{Arc3, Circle3, Line3, tessellate_curve_uniform};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub start: Point3,
    pub end: Point3,
    pub basis: Option<Circle3>,
}

impl Edge {
    /// Straight edge between two points.
    #[must_use]
    pub const fn line(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            basis: None,
        }
    }

    /// Circular edge from `start` to `end` along `basis`.
    #[must_use]
    pub const fn arc(start: Point3, end: Point3, basis: Circle3) -> Self {
        Self {
            start,
            end,
            basis: Some(basis),
        }
    }

    #[must_use]
    pub const fn is_arc(&self) -> bool {
        self.basis.is_some()
    }

    #[must_use]
    pub fn chord_length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// The curved part of this edge as an arc, `None` for straight edges.
    #[must_use]
    pub fn as_arc3(&self) -> Option<Arc3> {
        self.basis
            .as_ref()
            .map(|circle| Arc3::on_circle(circle, self.start, self.end))
    }

    /// Length along the edge: arc length for curved edges, chord length otherwise.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self.as_arc3() {
            Some(arc) => arc.length(),
            None => self.chord_length(),
        }
    }

    /// Points along the edge. Straight edges yield their two endpoints; arcs are
    /// split into `arc_steps` equal-angle pieces.
    #[must_use]
    pub fn sample_points(&self, arc_steps: usize) -> Vec<Point3> {
        match self.as_arc3() {
            Some(arc) => tessellate_curve_uniform(&arc, arc_steps),
            None => tessellate_curve_uniform(&Line3::new(self.start, self.end), 1),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loop {
    edges: Vec<Edge>,
}

impl Loop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight edges between consecutive points; fewer than two points give an
    /// empty loop.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Self {
        let edges = points
            .windows(2)
            .map(|pair| Edge::line(pair[0], pair[1]))
            .collect();
        Self { edges }
    }

    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.edges.iter().filter(|edge| edge.is_arc()).count()
    }

    /// Summed edge length. Gaps between edges do not count.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.edges.iter().map(Edge::length).sum()
    }
}

impl From<Vec<Edge>> for Loop {
    fn from(edges: Vec<Edge>) -> Self {
        Self { edges }
    }
}

impl Extend<Edge> for Loop {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Loop {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl IntoIterator for Loop {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

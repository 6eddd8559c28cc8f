use rand::Rng;

use super::Graph;

/// Four-cycle A-B-C-D with heavy diagonals
pub fn square() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for (u, v, weight) in [
        ("A", "B", 1.),
        ("B", "C", 2.),
        ("C", "D", 3.),
        ("D", "A", 4.),
        ("A", "C", 10.),
        ("B", "D", 10.),
    ] {
        graph
            .add_edge(u, v, weight)
            .expect("fixture edges are valid");
    }
    graph
}

/// Complete graph over `n` random points in the plane, weighted by euclidean distance.
///
/// Distances obey the triangle inequality.
pub fn random_euclidean_graph<R: Rng>(rng: &mut R, n: usize) -> Graph<usize> {
    let points = (0..n)
        .map(|_| [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)])
        .collect::<Vec<[f64; 2]>>();
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_node(i);
    }
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            let distance = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt();
            graph
                .add_edge(i, j, distance)
                .expect("fixture edges are valid");
        }
    }
    graph
}

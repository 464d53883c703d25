use adjgraph::{ErrorKind, Graph, GraphError, VertexQueue};

fn diamond() -> Graph {
    // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3 ; added in this order.
    Graph::from_edges(4, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap()
}

#[test]
fn new_graph_has_empty_lists() {
    for n in [1, 2, 17, 256] {
        let graph = Graph::new(n).unwrap();
        assert_eq!(graph.vertex_count(), n);
        assert_eq!(graph.edge_count(), 0);
        assert!((0..n).all(|v| graph.out_degree(v) == Ok(0)));
    }
    assert_eq!(Graph::new(0).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn bfs_visit_order_reflects_prepending() {
    let graph = diamond();
    // Vertex 0's list is [2, 1] after insertion.
    assert_eq!(graph.neighbors(0).unwrap().collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(graph.bfs(0).unwrap(), vec![0, 2, 1, 3]);
    assert_eq!(graph.bfs(0).unwrap(), graph.bfs(0).unwrap());
}

#[test]
fn dfs_visit_order_reflects_prepending() {
    assert_eq!(diamond().dfs(0).unwrap(), vec![0, 2, 3, 1]);
}

#[test]
fn dijkstra_reference_graph() {
    let graph =
        Graph::from_edges(5, [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)]).unwrap();
    let paths = graph.dijkstra(0).unwrap();

    assert_eq!(paths.distances(), &[Some(0), Some(3), Some(1), Some(4), None]);
    assert_eq!(paths.distance(4), None);
    assert!(paths.to_string().ends_with("4\t\tINFINITE"));
}

#[test]
fn remove_edge_round_trip() {
    let mut graph = diamond();
    let before = graph.clone();

    graph.add_edge(1, 0, 6).unwrap();
    assert_eq!(graph.edge_count(), 5);
    graph.remove_edge(1, 0).unwrap();
    assert_eq!(graph, before);
}

#[test]
fn missing_edge_is_reported_and_harmless() {
    let mut graph = diamond();
    let before = graph.clone();

    let err = graph.remove_edge(3, 1).unwrap_err();
    assert_eq!(err, GraphError::EdgeNotFound { src: 3, dest: 1 });
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(graph, before);

    // The graph is still fully usable.
    assert_eq!(graph.bfs(0).unwrap().len(), 4);
}

#[test]
fn out_of_range_vertices_are_invalid_arguments() {
    let mut graph = diamond();
    for err in [
        graph.add_edge(4, 0, 1).unwrap_err(),
        graph.remove_edge(0, 4).unwrap_err(),
        graph.bfs(4).unwrap_err(),
        graph.dfs(4).unwrap_err(),
        graph.dijkstra(4).unwrap_err(),
    ] {
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn queue_of_capacity_three() {
    let mut queue = VertexQueue::with_capacity(3).unwrap();
    for item in 1..=3 {
        queue.enqueue(item).unwrap();
    }
    assert_eq!(queue.enqueue(4).unwrap_err().kind(), ErrorKind::CapacityExceeded);

    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Ok(3));
    assert_eq!(queue.dequeue(), Err(GraphError::QueueEmpty));
}

#[test]
fn undirected_graph_traversals_cover_component() {
    let mut graph = Graph::new(6).unwrap();
    for (a, b) in [(0, 1), (1, 2), (2, 0), (3, 4)] {
        graph.add_undirected_edge(a, b, 1).unwrap();
    }

    let mut bfs = graph.bfs(1).unwrap();
    let mut dfs = graph.dfs(1).unwrap();
    bfs.sort_unstable();
    dfs.sort_unstable();
    assert_eq!(bfs, vec![0, 1, 2]);
    assert_eq!(bfs, dfs);

    let paths = graph.dijkstra(3).unwrap();
    assert_eq!(paths.distances(), &[None, None, None, Some(0), Some(1), None]);
}

use crate::instance::{Instance, RawArc, RawEdge, RawRequiredArc, RawRequiredEdge, RawRequiredNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Meta,
    RequiredNodes,
    RequiredEdges,
    RequiredArcs,
    NonRequiredEdges,
    NonRequiredArcs,
}

/// Parses a `.dat` instance file into an [`Instance`]. The parser is
/// deliberately permissive: a malformed header or data row is skipped
/// rather than turned into a fatal error.
pub fn parse_instance(contents: &str) -> Instance {
    let mut instance = Instance::default();
    let mut section = Section::Meta;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(new_section) = section_header(line) {
            section = new_section;
            continue;
        }

        match section {
            Section::Meta => parse_meta_line(line, &mut instance),
            Section::RequiredNodes => parse_required_node(line, &mut instance),
            Section::RequiredEdges => parse_required_edge(line, &mut instance),
            Section::RequiredArcs => parse_required_arc(line, &mut instance),
            Section::NonRequiredEdges => parse_non_required_edge(line, &mut instance),
            Section::NonRequiredArcs => parse_non_required_arc(line, &mut instance),
        }
    }

    instance
}

/// `EDGE` also matches as a substring of a `ReE.` header, so it is only
/// accepted as the non-required-edge marker when the line does not also
/// mention `ReE.`.
fn section_header(line: &str) -> Option<Section> {
    if line.starts_with("ReN.") {
        return Some(Section::RequiredNodes);
    }
    if line.starts_with("ReE.") {
        return Some(Section::RequiredEdges);
    }
    if line.starts_with("ReA.") {
        return Some(Section::RequiredArcs);
    }
    if line.starts_with("ARC") {
        return Some(Section::NonRequiredArcs);
    }
    if line.starts_with("EDGE") && !line.contains("ReE.") {
        return Some(Section::NonRequiredEdges);
    }
    None
}

fn parse_meta_line(line: &str, instance: &mut Instance) {
    let Some((key, value)) = line.split_once(':') else {
        return;
    };
    let key = key.trim();
    let value = value.trim();
    match key {
        "Capacity" => {
            if let Ok(v) = value.parse() {
                instance.capacity = v;
            }
        }
        "Depot Node" => {
            if let Ok(v) = value.parse() {
                instance.depot = v;
            }
        }
        _ => {}
    }
}

/// A required node's `name` token is `N<k>`; the node identifier is `k`.
fn node_id_from_name(name: &str) -> Option<u32> {
    name.strip_prefix('N').or(Some(name)).and_then(|s| s.parse().ok())
}

fn parse_required_node(line: &str, instance: &mut Instance) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return;
    }
    let (Some(node), Ok(demand), Ok(service_cost)) =
        (node_id_from_name(parts[0]), parts[1].parse(), parts[2].parse())
    else {
        return;
    };
    instance.required_nodes.push(RawRequiredNode {
        node,
        demand,
        service_cost,
    });
}

fn parse_required_edge(line: &str, instance: &mut Instance) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 6 {
        return;
    }
    let (Ok(from), Ok(to), Ok(traversal_cost), Ok(demand), Ok(service_cost)) = (
        parts[1].parse(),
        parts[2].parse(),
        parts[3].parse(),
        parts[4].parse(),
        parts[5].parse(),
    ) else {
        return;
    };
    instance.required_edges.push(RawRequiredEdge {
        edge: RawEdge {
            from,
            to,
            traversal_cost,
        },
        demand,
        service_cost,
    });
}

fn parse_required_arc(line: &str, instance: &mut Instance) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 6 {
        return;
    }
    let (Ok(from), Ok(to), Ok(traversal_cost), Ok(demand), Ok(service_cost)) = (
        parts[1].parse(),
        parts[2].parse(),
        parts[3].parse(),
        parts[4].parse(),
        parts[5].parse(),
    ) else {
        return;
    };
    instance.required_arcs.push(RawRequiredArc {
        arc: RawArc {
            from,
            to,
            traversal_cost,
        },
        demand,
        service_cost,
    });
}

fn parse_non_required_edge(line: &str, instance: &mut Instance) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return;
    }
    let (Ok(from), Ok(to), Ok(traversal_cost)) = (parts[1].parse(), parts[2].parse(), parts[3].parse()) else {
        return;
    };
    instance.non_required_edges.push(RawEdge {
        from,
        to,
        traversal_cost,
    });
}

fn parse_non_required_arc(line: &str, instance: &mut Instance) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return;
    }
    let (Ok(from), Ok(to), Ok(traversal_cost)) = (parts[1].parse(), parts[2].parse(), parts[3].parse()) else {
        return;
    };
    instance.non_required_arcs.push(RawArc {
        from,
        to,
        traversal_cost,
    });
}

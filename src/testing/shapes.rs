//! Small hand-written networks with known cuts.

/// Fifteen hubs split 6 / 9 by three links: hfx-pzl, bvb-cmg and nvd-jqt.
pub const SAMPLE: &str = "jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

// a -- b
//  \  /
//   c -- d
pub const TRIANGLE_WITH_PENDANT: &str = "a: b c
b: c
c: d
";

/// Two copies of K4 joined by the links a1-b1, a2-b2 and a3-b3.
pub const TWIN_CLIQUES: &str = "a1: a2 a3 a4 b1
a2: a3 a4 b2
a3: a4 b3
b1: b2 b3 b4
b2: b3 b4
b3: b4
";

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use serde::Serialize;

use tricore_lift::{BranchKind, TriCore};

use crate::model::{is_mapped, window, Image};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind { Fallthrough, Branch, CondBranch, Call }

impl EdgeKind {
    pub fn short(self) -> &'static str {
        match self {
            EdgeKind::Fallthrough => "ft",
            EdgeKind::Branch => "br",
            EdgeKind::CondBranch => "cbr",
            EdgeKind::Call => "call",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Edge { pub from: u32, pub to: u32, pub kind: EdgeKind }

/// Everything the recursive descent found.
#[derive(Debug, Default)]
pub struct Analysis {
    pub visited: HashSet<u32>,
    pub widths: HashMap<u32, u8>,
    pub edges: Vec<Edge>,
    /// Instructions after which control does not fall through.
    pub terminators: HashSet<u32>,
    pub calls: HashSet<u32>,
}

/// Follow `probe_info` edges from `entries`, decoding at most `max_instr`
/// instructions.
pub fn analyze_entries(cpu: &TriCore, img: &Image, entries: &[u32], max_instr: usize) -> Analysis {
    let mut queue: VecDeque<u32> = VecDeque::new();
    let mut out = Analysis::default();
    for &e in entries { if is_mapped(img, e) { queue.push_back(e); } }
    let mut steps = 0usize;
    while let Some(pc) = queue.pop_front() {
        if steps >= max_instr { break; }
        if !out.visited.insert(pc) { continue; }
        let bytes = window(img, pc, TriCore::MAX_INSTRUCTION_LENGTH);
        let info = match cpu.probe_info(bytes, pc, bytes.len()) {
            Ok(info) => info,
            Err(_) => { out.terminators.insert(pc); continue; }
        };
        steps += 1;
        out.widths.insert(pc, info.length);
        let ft = pc.wrapping_add(info.length as u32);
        let mut push = |to: u32, kind: EdgeKind, out: &mut Analysis| {
            out.edges.push(Edge { from: pc, to, kind });
            if is_mapped(img, to) && !out.visited.contains(&to) { queue.push_back(to); }
        };
        if info.branches.is_empty() {
            push(ft, EdgeKind::Fallthrough, &mut out);
            continue;
        }
        for branch in &info.branches {
            match *branch {
                BranchKind::Unconditional(t) => push(t, EdgeKind::Branch, &mut out),
                BranchKind::True(t) => push(t, EdgeKind::CondBranch, &mut out),
                BranchKind::False(t) => push(t, EdgeKind::Fallthrough, &mut out),
                BranchKind::Call(t) => {
                    out.calls.insert(t);
                    push(t, EdgeKind::Call, &mut out);
                    push(ft, EdgeKind::Fallthrough, &mut out);
                }
                // Unknown target; still add fallthrough
                BranchKind::IndirectCall(_) => push(ft, EdgeKind::Fallthrough, &mut out),
                BranchKind::Indirect(_) | BranchKind::Return | BranchKind::Unresolved => {
                    out.terminators.insert(pc);
                }
            }
        }
        if info.branches.iter().any(|b| matches!(b, BranchKind::Unconditional(_))) {
            out.terminators.insert(pc);
        }
    }
    out
}

#[derive(Debug, Clone, Serialize)]
pub struct Block { pub start: u32, pub end: u32 }

#[derive(Debug, Clone, Serialize)]
pub struct EdgeOut { pub from: u32, pub to: u32, pub kind: String }

#[derive(Debug, Clone, Serialize)]
pub struct FunctionOut { pub entry: u32, pub blocks: Vec<u32> }

#[derive(Debug, Clone, Serialize)]
pub struct Report<Blk=Block> {
    pub entries: Vec<u32>,
    pub blocks: Vec<Blk>,
    pub edges: Vec<EdgeOut>,
    pub functions: Vec<FunctionOut>,
}

/// Cut the visited instructions into blocks, lift edges to block level and
/// group blocks into functions (one per entry or call target).
pub fn build_report(seeds: &[u32], a: &Analysis) -> Report {
    // Block starts: entries + all edge destinations
    let mut starts: Vec<u32> = seeds.iter().copied().collect();
    starts.extend(a.edges.iter().map(|e| e.to));
    starts.sort_unstable();
    starts.dedup();

    let mut blocks: Vec<Block> = Vec::new();
    let mut addr_to_block: HashMap<u32, u32> = HashMap::new(); // pc -> block start
    for &start in &starts {
        if !a.visited.contains(&start) || addr_to_block.contains_key(&start) { continue; }
        let mut cur = start;
        loop {
            let Some(&w) = a.widths.get(&cur) else { break };
            addr_to_block.insert(cur, start);
            let next = cur.wrapping_add(w as u32);
            let should_end = a.terminators.contains(&cur)
                || !a.widths.contains_key(&next)
                || starts.binary_search(&next).is_ok();
            if should_end {
                blocks.push(Block { start, end: next });
                break;
            }
            cur = next;
        }
    }

    let edges: Vec<EdgeOut> = a
        .edges
        .iter()
        .map(|e| EdgeOut {
            from: *addr_to_block.get(&e.from).unwrap_or(&e.from),
            to: e.to,
            kind: e.kind.short().to_string(),
        })
        .collect();

    // Functions: reachable blocks from each root, not crossing call edges
    let mut adj: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for e in edges.iter().filter(|e| e.kind != "call") { adj.entry(e.from).or_default().push(e.to); }
    let mut roots: Vec<u32> = seeds.iter().copied().chain(a.calls.iter().copied()).collect();
    roots.sort_unstable();
    roots.dedup();
    let mut functions = Vec::new();
    for entry in roots.into_iter().filter(|r| a.visited.contains(r)) {
        let mut seen: HashSet<u32> = HashSet::new();
        let mut q = VecDeque::from([entry]);
        while let Some(b) = q.pop_front() {
            if !seen.insert(b) { continue; }
            if let Some(nexts) = adj.get(&b) { q.extend(nexts.iter().copied()); }
        }
        let mut blks: Vec<u32> = seen.into_iter().filter(|b| a.visited.contains(b)).collect();
        blks.sort_unstable();
        functions.push(FunctionOut { entry, blocks: blks });
    }

    Report { entries: seeds.to_vec(), blocks, edges, functions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Image, Segment};

    fn image(bytes: Vec<u8>) -> Image {
        Image { segments: vec![Segment { name: "s".into(), base: 0, bytes, perms: "r-x", kind: "raw" }] }
    }

    #[test]
    fn uncond_jump_edges_and_blocking() {
        // j +4 (16-bit), skipped 16-bit nop, then ret
        let img = image(vec![0x3C, 0x02, 0x00, 0x00, 0x00, 0x90]);
        let a = analyze_entries(&TriCore::default(), &img, &[0], 100);
        assert!(a.visited.contains(&0));
        assert!(a.edges.iter().any(|e| e.kind == EdgeKind::Branch && e.from == 0 && e.to == 4));
        assert!(!a.visited.contains(&2));
        assert!(a.terminators.contains(&4));
        let report = build_report(&[0], &a);
        assert_eq!(report.blocks.len(), 2);
        assert_eq!(report.functions[0].blocks, vec![0, 4]);
    }

    #[test]
    fn calls_start_functions() {
        // call +4 ; ret ; ret
        let img = image(vec![0x5C, 0x02, 0x00, 0x90, 0x00, 0x90]);
        let a = analyze_entries(&TriCore::default(), &img, &[0], 100);
        let report = build_report(&[0], &a);
        let entries: Vec<u32> = report.functions.iter().map(|f| f.entry).collect();
        assert_eq!(entries, vec![0, 4]);
    }
}

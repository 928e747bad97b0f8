/// Marker text for a list item.
///
/// Unordered items use a bullet, with an en dash on odd nesting levels.
/// Ordered items use `N.`; nested ordered levels cycle through letters and
/// roman numerals so sibling levels stay distinguishable.
pub fn marker_text(ordered: bool, number: u64, depth: u8) -> String {
    if !ordered {
        return if depth % 2 == 0 { "•" } else { "–" }.to_string();
    }
    match depth % 3 {
        1 => format!("{}.", int_to_lower_alpha(number)),
        2 => format!("{}.", int_to_lower_roman(number)),
        _ => format!("{}.", number),
    }
}

pub fn int_to_lower_alpha(n: u64) -> String {
    if n == 0 {
        return "a".to_string();
    }
    let mut s = String::new();
    let mut num = n - 1;
    loop {
        s.insert(0, (b'a' + (num % 26) as u8) as char);
        num /= 26;
        if num == 0 {
            break;
        }
        num -= 1;
    }
    s
}

pub fn int_to_lower_roman(n: u64) -> String {
    const VALUES: [(u64, &str); 13] = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut num = n;
    let mut result = String::new();
    for (val, sym) in VALUES {
        while num >= val {
            result.push_str(sym);
            num -= val;
        }
    }
    result
}

/// Running item numbers per nesting depth.
///
/// Moving back out to a shallower depth forgets the deeper counters, so a
/// new nested list restarts at one.
#[derive(Debug, Default)]
pub struct ListCounters {
    counters: Vec<u64>,
}

impl ListCounters {
    pub fn starting_at(start: u64) -> Self {
        Self {
            counters: vec![start.saturating_sub(1)],
        }
    }

    pub fn next(&mut self, depth: u8) -> u64 {
        let depth = usize::from(depth);
        self.counters.truncate(depth + 1);
        if self.counters.len() <= depth {
            self.counters.resize(depth + 1, 0);
        }
        self.counters[depth] = self.counters[depth].saturating_add(1);
        self.counters[depth]
    }

    /// Returns to `depth` without numbering an item, forgetting deeper levels.
    pub fn resume(&mut self, depth: u8) {
        self.counters.truncate(usize::from(depth) + 1);
    }
}

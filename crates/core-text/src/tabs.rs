//! Tab expansion. Buffers never store `\t`; each tab becomes `TAB_SIZE` spaces.

pub const TAB_SIZE: usize = 4;

pub fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_owned();
    }
    line.replace('\t', &" ".repeat(TAB_SIZE))
}

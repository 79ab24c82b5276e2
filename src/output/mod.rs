pub mod formatter;

pub use formatter::{
    format_pull_request_detail, format_pull_request_line, format_pull_request_list,
    format_pull_request_markdown, format_tag_detail, format_tag_line, format_tag_list,
    should_use_colors,
};

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Datelike, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// 渲染站点HTML
///
/// 页脚年份取当前UTC年份，其余输出只取决于输入
pub fn render_site(generated_text: &str, keyword: &str) -> String {
    render_site_for_year(generated_text, keyword, Utc::now().year())
}

/// 使用指定年份渲染站点HTML
///
/// 生成文本先做HTML转义再把换行转换为 `<br>`；关键词转为标题格式后
/// 写入 `<title>` 和 `<h1>`
pub fn render_site_for_year(generated_text: &str, keyword: &str, year: i32) -> String {
    let heading = title_case(keyword);
    let heading = encode_text(&heading);
    let description = encode_double_quoted_attribute(keyword);
    let body = text_to_html(generated_text);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{heading}</title>
    <meta name="description" content="Comprehensive guide about {description}">
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; line-height: 1.6; }}
        h1 {{ color: #333; }}
        .content {{ margin-top: 20px; }}
    </style>
</head>
<body>
    <h1>{heading}</h1>
    <div class="content">
        {body}
    </div>
    <footer style="margin-top: 40px; color: #666; font-size: 0.9em;">
        <p>&copy; {year} - Generated by AutoSEO</p>
    </footer>
</body>
</html>
"#
    )
}

/// 转义文本并把换行转换为 `<br>`
pub fn text_to_html(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    encode_text(&normalized).replace('\n', "<br>")
}

/// 标题格式：每段连续字母的首字母大写，其余小写
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_alpha = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(ch);
            prev_is_alpha = false;
        }
    }

    out
}

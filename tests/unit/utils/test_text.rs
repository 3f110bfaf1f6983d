use edu_cms_client::utils::text::{join_url, slugify};

#[test]
fn test_slugify_latin_titles() {
    assert_eq!(slugify("Top 10 Universities in Canada"), "top-10-universities-in-canada");
    assert_eq!(slugify("  --Visa & Residence--  "), "visa-residence");
}

#[test]
fn test_slugify_arabic_titles() {
    assert_eq!(slugify("منح دراسية 2025"), "منح-دراسية-2025");
}

#[test]
fn test_join_url_variants() {
    assert_eq!(join_url("http://h/api", "blog"), "http://h/api/blog");
    assert_eq!(join_url("http://h/api/", "/blog"), "http://h/api/blog");
    assert_eq!(join_url("http://h/api", "//media///upload"), "http://h/api/media/upload");
}

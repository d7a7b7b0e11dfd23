mod app_test;
mod comment_page_test;
mod tag_page_test;

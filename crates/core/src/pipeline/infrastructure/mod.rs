pub mod threaded_search_executor;

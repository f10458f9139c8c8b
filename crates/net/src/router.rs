use axum::{
    routing::get, routing::post,
    Router, handler::Handler
};



pub fn main_router<STATE>(components: Vec<Router<STATE>>, state: STATE) -> Router
where
    STATE: Clone + Send + Sync + 'static
{
    let mut app = Router::<STATE>::new();

    for router in components {
        app = app.merge(router);
    }

    app.with_state(state)
}



pub fn get_router_builder<T, S>(
    path: &str,
    handler: impl Handler<T, S>  + Clone + Send + 'static
) -> Router<S>
where
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    Router::<S>::new().route(path, get(handler))
}


pub fn post_router_builder<T, S>(
    path: &str,
    handler: impl Handler<T, S>  + Clone + Send + 'static
) -> Router<S>
where
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    Router::<S>::new().route(path, post(handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[axum::debug_handler]
    async fn hello_handler() -> String {
        "Hello, World!".to_string()
    }

    async fn echo_handler(body: String) -> String {
        body
    }

    #[tokio::test]
    async fn test_get_router_builder() {

        let router = get_router_builder::<_ ,_>(
            "/hello",
            hello_handler
        );
        let app = main_router(vec![router], ());

        let request = Request::builder()
            .uri("/hello")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_post_router_builder() {

        let router = post_router_builder::<_ ,_>(
            "/echo",
            echo_handler
        );
        let app = main_router(vec![router], ());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .body(Body::from("ping"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
